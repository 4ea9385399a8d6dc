//! Site manifest for the renderer.
//!
//! `site.json` carries everything the renderer needs outside of single
//! posts: site info, navigation, social links with their icons, theme
//! tokens, scroll-reveal defaults and the newest blog posts.

pub mod bundler;
mod icon;

pub use bundler::{AliasTable, BundlerManifest};
pub use icon::Icon;

use crate::config::{RevealConfig, SiteConfig, SiteInfoConfig};
use crate::content::{Entry, excerpt};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the site manifest inside the output directory.
pub const SITE_MANIFEST: &str = "site.json";

/// Excerpt length for the home page post list.
pub const RECENT_EXCERPT_LENGTH: usize = 300;

#[derive(Debug, Serialize)]
pub struct NavItem<'a> {
    pub name: &'a str,
    pub url: &'a str,
    /// In-page section targeted by anchor links.
    pub section: Option<&'a str>,
    pub external: bool,
}

#[derive(Debug, Serialize)]
pub struct SocialItem<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub icon: Icon,
    pub svg: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ThemeTokens<'a> {
    pub nav_height: u32,
    pub colors: &'a BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentPost {
    pub title: String,
    pub slug: String,
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub time_to_read: u32,
}

#[derive(Debug, Serialize)]
pub struct SiteManifest<'a> {
    pub info: &'a SiteInfoConfig,
    pub nav: Vec<NavItem<'a>>,
    pub social: Vec<SocialItem<'a>>,
    pub theme: ThemeTokens<'a>,
    pub reveal: &'a RevealConfig,
    pub recent_posts: Vec<RecentPost>,
}

impl<'a> SiteManifest<'a> {
    /// `entries` must be newest first, as returned by the content query.
    pub fn new(config: &'a SiteConfig, entries: &[Entry]) -> Self {
        let nav = config
            .site
            .nav
            .iter()
            .map(|link| NavItem {
                name: &link.name,
                url: &link.url,
                section: link.section(),
                external: link.is_external(),
            })
            .collect();

        let social = config
            .site
            .social
            .iter()
            .map(|link| {
                let icon = link.icon();
                SocialItem {
                    name: &link.name,
                    url: &link.url,
                    icon,
                    svg: icon.svg(),
                }
            })
            .collect();

        Self {
            info: &config.site.info,
            nav,
            social,
            theme: ThemeTokens {
                nav_height: config.theme.nav_height,
                colors: &config.theme.colors,
            },
            reveal: &config.theme.reveal,
            recent_posts: recent_posts(entries, config.site.recent_posts),
        }
    }

    /// Write `site.json` into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        let path = dir.join(SITE_MANIFEST);
        fs::write(&path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

/// The newest `limit` entries, keeping only visible ones.
///
/// The limit applies before the visibility filter, so hidden posts among
/// the newest shorten the list.
pub fn recent_posts(entries: &[Entry], limit: usize) -> Vec<RecentPost> {
    entries
        .iter()
        .take(limit)
        .filter(|entry| entry.is_visible())
        .map(|entry| RecentPost {
            title: entry.title.clone(),
            slug: entry.route().unwrap_or_default().to_string(),
            date: entry.date.map(|d| d.to_string()),
            tags: entry.tags.clone(),
            excerpt: excerpt::prune(&entry.text, RECENT_EXCERPT_LENGTH),
            time_to_read: entry.time_to_read,
        })
        .collect()
}
