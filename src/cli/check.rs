//! Check command: validate config and content without writing anything.
//!
//! Reports:
//! - routes claimed by more than one visible post
//! - previous/next links that land on hidden posts (positional pagination)
//! - config warnings
//!
//! With `--strict`, any finding fails the command.

use anyhow::{Result, bail};
use rustc_hash::FxHashMap;
use std::fmt;
use std::path::PathBuf;

use crate::cli::CheckArgs;
use crate::cli::common::query_posts;
use crate::config::SiteConfig;
use crate::log;
use crate::plan::{PageInstruction, build_plan};
use crate::utils::plural_count;

/// Something worth fixing in the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Several visible posts resolve to the same route.
    DuplicateRoute { route: String, sources: Vec<PathBuf> },
    /// A page links to a post that has no page of its own.
    HiddenLink {
        route: String,
        direction: &'static str,
        target: String,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRoute { route, sources } => {
                let sources: Vec<_> = sources.iter().map(|p| p.display().to_string()).collect();
                write!(f, "route {route} is used by {}", sources.join(", "))
            }
            Self::HiddenLink {
                route,
                direction,
                target,
            } => write!(f, "{route} has hidden post `{target}` as {direction}"),
        }
    }
}

/// Execute check command
pub fn check_site(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    let config_warnings = config.diagnose().warnings().len();

    let entries = query_posts(config, false)?;
    let plan = build_plan(&entries, config.build.blog.pagination)?;
    let findings = inspect(&plan);

    for finding in &findings {
        log!("warning"; "{}", finding);
    }

    let total = findings.len() + config_warnings;
    log!(
        "check";
        "{} planned from {}, {}",
        plural_count(plan.len(), "page"),
        plural_count(entries.len(), "post"),
        plural_count(total, "warning")
    );

    if args.strict && total > 0 {
        bail!("check failed: {} (strict)", plural_count(total, "warning"));
    }
    Ok(())
}

/// Inspect a plan for duplicate routes and links to hidden posts.
pub fn inspect(plan: &[PageInstruction<'_>]) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mut by_route: FxHashMap<&str, Vec<PathBuf>> = FxHashMap::default();
    let mut order = Vec::new();
    for page in plan {
        let sources = by_route.entry(page.route).or_default();
        if sources.is_empty() {
            order.push(page.route);
        }
        sources.push(page.entry.source.clone());
    }
    for route in order {
        if let Some(sources) = by_route.remove(route)
            && sources.len() > 1
        {
            findings.push(Finding::DuplicateRoute {
                route: route.to_string(),
                sources,
            });
        }
    }

    for page in plan {
        let links = [
            ("previous", page.context.previous),
            ("next", page.context.next),
        ];
        for (direction, linked) in links {
            if let Some(entry) = linked
                && !entry.is_visible()
            {
                findings.push(Finding::HiddenLink {
                    route: page.route.to_string(),
                    direction,
                    target: entry.title.clone(),
                });
            }
        }
    }

    findings
}
