//! Build command.
//!
//! Pipeline: clean -> query -> plan -> register -> write manifests
//!
//! ```text
//! public/
//! ├── pages.json     # one record per planned page
//! ├── site.json      # site info, nav, social, theme, recent posts
//! └── bundler.json   # import aliases, null-routed modules per stage
//! ```

use crate::{
    cli::common::{query_posts, template_component},
    config::SiteConfig,
    debug, log,
    plan::{ManifestSink, build_plan, register_all},
    site::{AliasTable, BundlerManifest, SiteManifest},
    utils::plural_count,
};
use anyhow::{Context, Result, bail};
use std::fs;

/// Plan the blog and write all manifests to the output directory.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    prepare_output(config)?;

    let entries = query_posts(config, false)?;
    let plan = build_plan(&entries, config.build.blog.pagination)?;

    let aliases = AliasTable::new(config.get_root(), &config.build.bundler);
    let mut sink = ManifestSink::new(template_component(config, &aliases));
    register_all(&mut sink, &plan)?;

    let pages = sink.write_to(output)?;
    let site = SiteManifest::new(config, &entries).write_to(output)?;
    let bundler = BundlerManifest::new(&aliases, &config.build.bundler)?.write_to(output)?;

    for path in [&pages, &site, &bundler] {
        debug!("build"; "wrote {}", config.root_relative(path).display());
    }

    let hidden = entries.len() - entries.iter().filter(|e| e.is_visible()).count();
    if hidden > 0 {
        debug!("build"; "{} not shown", plural_count(hidden, "post"));
    }

    log!(
        "build";
        "planned {} from {} into {}",
        plural_count(sink.len(), "page"),
        plural_count(entries.len(), "post"),
        config.root_relative(output).display()
    );
    Ok(())
}

/// Remove the output directory when `--clean` is set.
fn prepare_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    if !config.build.clean || !output.exists() {
        return Ok(());
    }

    if output == config.get_root() || config.build.content.starts_with(output) {
        bail!(
            "Refusing to clean {}: it contains the site sources",
            output.display()
        );
    }

    fs::remove_dir_all(output)
        .with_context(|| format!("Failed to clean output directory {}", output.display()))?;
    debug!("build"; "cleaned {}", output.display());
    Ok(())
}
