//! `[[site.nav]]` navigation links.
//!
//! # Example
//!
//! ```toml
//! [[site.nav]]
//! name = "Home"
//! url = "/"
//!
//! [[site.nav]]
//! name = "Work"
//! url = "#projects"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::route::{is_external_link, section_id, split_path_fragment};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A navigation entry: a page route, an in-page section anchor or an
/// external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub url: String,
}

impl NavLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Section id for anchor links (`#about` -> `about`).
    pub fn section(&self) -> Option<&str> {
        section_id(&self.url)
    }

    /// Whether the link leaves the site.
    pub fn is_external(&self) -> bool {
        is_external_link(&self.url)
    }
}

/// Validate nav links: names set, urls routable, no duplicate names.
pub(super) fn validate_links(links: &[NavLink], field: FieldPath, diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();

    for link in links {
        if link.name.trim().is_empty() {
            diag.error(field, format!("nav link '{}' has an empty name", link.url));
        }

        let (path, fragment) = split_path_fragment(&link.url);
        let routable = link.is_external() || path.starts_with('/') || !fragment.is_empty();
        if !routable {
            diag.error_with_hint(
                field,
                format!("nav link '{}' has unroutable url '{}'", link.name, link.url),
                "use a site path (\"/blog/\"), a section anchor (\"#about\") or a full URL",
            );
        }

        if !seen.insert(link.name.as_str()) {
            diag.warn(field, format!("duplicate nav link '{}'", link.name));
        }
    }
}
