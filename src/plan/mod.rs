//! Page plan builder.
//!
//! Turns newest-first blog entries into one page instruction per visible
//! entry. The builder is pure: registering the pages is the job of a
//! [`PageSink`](sink::PageSink).
//!
//! # Pagination
//!
//! `previous` points at an older post and `next` at a newer one.
//!
//! - [`PaginationMode::Positional`] (default) walks two cursors over the
//!   *full* sequence: `previous` starts at index 1 and `next` at index 0,
//!   each advancing only when a visible entry consumes it. With hidden
//!   entries interleaved, links can land on hidden entries.
//! - [`PaginationMode::Nearest`] links each visible entry to its nearest
//!   visible neighbors.
//!
//! ```text
//! entries:     P1(visible)  P2(hidden)  P3(visible)
//! positional:  P1 prev=P2 next=-        P3 prev=- next=P1
//! nearest:     P1 prev=P3 next=-        P3 prev=- next=P1
//! ```

pub mod sink;

pub use sink::{ManifestSink, PageSink};

use crate::content::Entry;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Template id of the single-post page.
pub const BLOG_POST_TEMPLATE: &str = "blog-post";

/// How previous/next links are chosen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// Two cursors over the full sequence.
    #[default]
    Positional,
    /// Nearest visible neighbors.
    Nearest,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("entry #{index} `{title}` ({}) has neither a slug nor a derived slug", .path.display())]
    MissingSlug {
        index: usize,
        title: String,
        path: PathBuf,
    },
}

/// Data handed to the template when rendering one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageContext<'a> {
    /// Same as the page route.
    pub slug: &'a str,
    /// The entry's derived slug.
    pub file_path: &'a str,
    /// Older neighbor.
    pub previous: Option<&'a Entry>,
    /// Newer neighbor.
    pub next: Option<&'a Entry>,
}

/// One page to generate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageInstruction<'a> {
    pub route: &'a str,
    pub template: &'static str,
    pub context: PageContext<'a>,
    /// The entry this page renders.
    pub entry: &'a Entry,
}

/// Build page instructions for `entries` (newest first).
///
/// Fails without producing anything if any entry lacks both an explicit
/// and a derived slug.
pub fn build_plan(
    entries: &[Entry],
    mode: PaginationMode,
) -> Result<Vec<PageInstruction<'_>>, PlanError> {
    let routes = routes(entries)?;

    let links = match mode {
        PaginationMode::Positional => positional_links(entries),
        PaginationMode::Nearest => nearest_links(entries),
    };

    Ok(entries
        .iter()
        .zip(routes)
        .zip(links)
        .filter_map(|((entry, route), link)| {
            let (previous, next) = link?;
            Some(PageInstruction {
                route,
                template: BLOG_POST_TEMPLATE,
                context: PageContext {
                    slug: route,
                    file_path: &entry.derived_slug,
                    previous,
                    next,
                },
                entry,
            })
        })
        .collect())
}

/// Register every instruction with `sink`, in order.
pub fn register_all<S: PageSink + ?Sized>(
    sink: &mut S,
    plan: &[PageInstruction<'_>],
) -> anyhow::Result<()> {
    for page in plan {
        sink.register(page)?;
    }
    Ok(())
}

/// Resolve every entry's route up front so a missing one fails the whole pass.
fn routes(entries: &[Entry]) -> Result<Vec<&str>, PlanError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.route().ok_or_else(|| PlanError::MissingSlug {
                index,
                title: entry.title.clone(),
                path: entry.source.clone(),
            })
        })
        .collect()
}

/// `(previous, next)` for each position; `None` for hidden entries.
type Links<'a> = Vec<Option<(Option<&'a Entry>, Option<&'a Entry>)>>;

fn positional_links(entries: &[Entry]) -> Links<'_> {
    let last = entries.len().saturating_sub(1);
    let mut previous_cursor = 1;
    let mut next_cursor = 0;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if !entry.is_visible() {
                return None;
            }
            let previous = if i == last {
                None
            } else {
                let found = entries.get(previous_cursor);
                previous_cursor += 1;
                found
            };
            let next = if i == 0 {
                None
            } else {
                let found = entries.get(next_cursor);
                next_cursor += 1;
                found
            };
            Some((previous, next))
        })
        .collect()
}

fn nearest_links(entries: &[Entry]) -> Links<'_> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if !entry.is_visible() {
                return None;
            }
            let previous = entries[i + 1..].iter().find(|e| e.is_visible());
            let next = entries[..i].iter().rev().find(|e| e.is_visible());
            Some((previous, next))
        })
        .collect()
}
