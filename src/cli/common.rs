//! Common utilities shared across CLI commands.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::content::{ContentQuery, Entry, query::PROGRESS_COUNTER};
use crate::logger::ProgressLine;
use crate::log;
use crate::site::AliasTable;
use crate::utils::path::to_slash;

/// Query blog posts for one pass.
///
/// Failures are logged and propagated; no partial result is returned.
/// `quiet` suppresses the progress line.
pub fn query_posts(config: &SiteConfig, quiet: bool) -> Result<Vec<Entry>> {
    let query = ContentQuery::from_config(config);

    let result = query.collect_files().and_then(|files| {
        let progress =
            (!quiet).then(|| ProgressLine::new("content", &[(PROGRESS_COUNTER, files.len())]));
        let entries = query.load(&files, progress.as_ref());
        if let Some(p) = progress {
            p.finish();
        }
        entries
    });

    result.map_err(|e| {
        log!("error"; "{}", e);
        e.into()
    })
}

/// Resolved path of the single-post template component.
pub fn template_component(config: &SiteConfig, aliases: &AliasTable) -> String {
    to_slash(&aliases.resolve(&config.build.blog.template))
}
