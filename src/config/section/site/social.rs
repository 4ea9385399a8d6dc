//! `[[site.social]]` social profile links.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::site::Icon;
use crate::utils::path::route::is_external_link;
use serde::{Deserialize, Serialize};

/// A social profile link. `name` selects the icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn icon(&self) -> Icon {
        Icon::from_name(&self.name)
    }

    pub(super) fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if !is_external_link(&self.url) {
            diag.error_with_hint(
                field,
                format!("social link '{}' must be a full URL, got '{}'", self.name, self.url),
                "use format like https://github.com/you/",
            );
        }
        if self.icon() == Icon::Fallback {
            diag.warn(
                field,
                format!(
                    "no icon for '{}' (names are case-sensitive: {}), the default icon is used",
                    self.name,
                    Icon::KNOWN.map(|icon| icon.name()).join(", ")
                ),
            );
        }
    }
}
