//! `[site.info]` configuration.
//!
//! Basic site information written into `site.json` for the renderer.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// SEO keywords.
    pub keywords: Vec<String>,

    /// Canonical site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Language tag (e.g., "en_US").
    pub language: String,

    /// Owner display name.
    pub name: String,

    /// Owner location.
    pub location: String,

    /// Contact email.
    pub email: String,

    /// Twitter handle, including the leading `@`.
    pub twitter_handle: Option<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            keywords: Vec::new(),
            url: None,
            language: "en_US".into(),
            name: String::new(),
            location: String::new(),
            email: String::new(),
            twitter_handle: None,
        }
    }
}

impl SiteInfoConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.info.title");
    pub const URL: FieldPath = FieldPath::new("site.info.url");
    pub const EMAIL: FieldPath = FieldPath::new("site.info.email");
    pub const TWITTER_HANDLE: FieldPath = FieldPath::new("site.info.twitter_handle");

    /// Validate site information.
    ///
    /// # Checks
    /// - `title` should be set (warning)
    /// - `url` must be a valid http(s) URL with a host
    /// - `email`, when set, must contain `@`
    /// - `twitter_handle`, when set, must start with `@`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.warn(Self::TITLE, "site title is empty");
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::URL,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if !self.email.is_empty() && !self.email.contains('@') {
            diag.error(Self::EMAIL, format!("'{}' is not an email address", self.email));
        }

        if let Some(handle) = &self.twitter_handle
            && !handle.starts_with('@')
        {
            diag.error_with_hint(
                Self::TWITTER_HANDLE,
                format!("'{handle}' is missing the leading '@'"),
                format!("use \"@{handle}\""),
            );
        }
    }
}
