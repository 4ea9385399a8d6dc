//! `[site]` section configuration.
//!
//! Contains site metadata, navigation and social links.
//!
//! # Example
//!
//! ```toml
//! [site]
//! recent_posts = 6
//!
//! [site.info]
//! title = "Jane Doe | Web Developer"
//! description = "I build fast, accessible websites."
//! url = "https://jane.dev"
//! name = "Jane Doe"
//!
//! [[site.nav]]
//! name = "About"
//! url = "#about"
//!
//! [[site.social]]
//! name = "Github"
//! url = "https://github.com/jane/"
//! ```

mod info;
mod nav;
mod social;

pub use info::SiteInfoConfig;
pub use nav::NavLink;
pub use social::SocialLink;

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site section configuration containing info, nav and social links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, description, owner, etc.)
    pub info: SiteInfoConfig,

    /// Navigation links, in display order.
    pub nav: Vec<NavLink>,

    /// Social profile links, in display order.
    pub social: Vec<SocialLink>,

    /// Number of visible posts listed on the home page.
    pub recent_posts: usize,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            info: SiteInfoConfig::default(),
            nav: Vec::new(),
            social: Vec::new(),
            recent_posts: 6,
        }
    }
}

impl SiteSectionConfig {
    pub const NAV: FieldPath = FieldPath::new("site.nav");
    pub const SOCIAL: FieldPath = FieldPath::new("site.social");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.info.validate(diag);
        nav::validate_links(&self.nav, Self::NAV, diag);
        for link in &self.social {
            link.validate(Self::SOCIAL, diag);
        }
    }
}
