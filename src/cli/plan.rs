//! Plan command: print the page plan as JSON.

use anyhow::{Context, Result};
use std::fs;

use crate::cli::PlanArgs;
use crate::cli::common::{query_posts, template_component};
use crate::config::SiteConfig;
use crate::log;
use crate::plan::{ManifestSink, build_plan, register_all};
use crate::site::AliasTable;
use crate::utils::plural_count;

/// Execute plan command
pub fn run_plan(args: &PlanArgs, config: &SiteConfig) -> Result<()> {
    // JSON on stdout must not be mixed with progress output
    let to_stdout = args.output.is_none();

    let json = plan_json(config, args.pretty, to_stdout)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("plan"; "wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Query, plan and serialize the pages without writing anything.
fn plan_json(config: &SiteConfig, pretty: bool, quiet: bool) -> Result<String> {
    let entries = query_posts(config, quiet)?;
    let plan = build_plan(&entries, config.build.blog.pagination)?;

    let aliases = AliasTable::new(config.get_root(), &config.build.bundler);
    let mut sink = ManifestSink::new(template_component(config, &aliases));
    register_all(&mut sink, &plan)?;

    if !quiet {
        log!("plan"; "planned {}", plural_count(sink.len(), "page"));
    }
    sink.to_json(pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::PathBuf;

    fn config(dir: &std::path::Path) -> SiteConfig {
        let blog = dir.join("content/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(
            blog.join("hello.md"),
            "---\ntitle: Hello\ndate: 2021-05-01\nshow: 'true'\n---\nHi.",
        )
        .unwrap();
        let mut config = test_parse_config("");
        config.set_root(dir);
        config.build.content = dir.join("content");
        config
    }

    #[test]
    fn test_plan_json() {
        let dir = tempfile::tempdir().unwrap();
        let json = plan_json(&config(dir.path()), false, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["route"], "/blog/hello/");
        assert_eq!(value[0]["template"], "blog-post");
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_run_plan_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out: PathBuf = dir.path().join("out/plan.json");
        let args = PlanArgs {
            pretty: true,
            pagination: None,
            output: Some(out.clone()),
        };
        run_plan(&args, &config(dir.path())).unwrap();

        let written = fs::read_to_string(out).unwrap();
        assert!(written.contains("\"route\": \"/blog/hello/\""));
    }
}
