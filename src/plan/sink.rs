//! Page registration.
//!
//! A [`PageSink`] receives planned pages one at a time. Registering a route
//! twice in one pass replaces the earlier page and keeps its position.

use super::PageInstruction;
use crate::content::Entry;
use crate::debug;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the page manifest inside the output directory.
pub const PAGES_MANIFEST: &str = "pages.json";

/// Receives planned pages.
pub trait PageSink {
    fn register(&mut self, page: &PageInstruction<'_>) -> Result<()>;
}

/// Neighbor summary embedded in a page's context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub title: String,
    pub slug: String,
    pub file_path: String,
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub time_to_read: u32,
}

impl From<&Entry> for EntrySummary {
    fn from(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            slug: entry.route().unwrap_or_default().to_string(),
            file_path: entry.derived_slug.clone(),
            date: entry.date.map(|d| d.to_rfc3339()),
            tags: entry.tags.clone(),
            excerpt: entry.excerpt.clone(),
            time_to_read: entry.time_to_read,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecordContext {
    pub slug: String,
    pub file_path: String,
    pub previous: Option<EntrySummary>,
    pub next: Option<EntrySummary>,
}

/// Owned, serializable form of a registered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    pub route: String,
    pub template: String,
    /// Resolved path of the template component.
    pub component: String,
    pub context: PageRecordContext,
}

/// Collects pages in memory and writes them to `pages.json`.
#[derive(Debug, Default)]
pub struct ManifestSink {
    component: String,
    pages: Vec<PageRecord>,
    by_route: FxHashMap<String, usize>,
}

impl ManifestSink {
    /// `component` is recorded on every page as the template to render.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            ..Self::default()
        }
    }

    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.pages)?
        } else {
            serde_json::to_string(&self.pages)?
        };
        Ok(json)
    }

    /// Write `pages.json` into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        let path = dir.join(PAGES_MANIFEST);
        fs::write(&path, self.to_json(true)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

impl PageSink for ManifestSink {
    fn register(&mut self, page: &PageInstruction<'_>) -> Result<()> {
        let record = PageRecord {
            route: page.route.to_string(),
            template: page.template.to_string(),
            component: self.component.clone(),
            context: PageRecordContext {
                slug: page.context.slug.to_string(),
                file_path: page.context.file_path.to_string(),
                previous: page.context.previous.map(EntrySummary::from),
                next: page.context.next.map(EntrySummary::from),
            },
        };

        match self.by_route.get(page.route) {
            Some(&index) => {
                debug!("plan"; "route {} registered again, replacing", page.route);
                self.pages[index] = record;
            }
            None => {
                self.by_route.insert(page.route.to_string(), self.pages.len());
                self.pages.push(record);
            }
        }
        Ok(())
    }
}
