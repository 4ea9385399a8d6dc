//! Markdown content: frontmatter, derived slugs, excerpts and the post query.
//!
//! | Module        | Purpose                                            |
//! |---------------|----------------------------------------------------|
//! | `frontmatter` | `---` YAML-like and `+++` TOML frontmatter         |
//! | `slug`        | File path -> derived slug                          |
//! | `excerpt`     | Plain text, pruned excerpts, time to read          |
//! | `query`       | Walk, filter, sort and limit posts                 |

pub mod excerpt;
pub mod frontmatter;
pub mod query;
pub mod slug;

pub use query::ContentQuery;

use crate::utils::date::DateTimeUtc;
use serde_json::Value;
use std::path::PathBuf;

/// One markdown post.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub title: String,
    /// Raw frontmatter `show` value.
    pub show: Value,
    /// Frontmatter `slug`, if given.
    pub explicit_slug: Option<String>,
    /// Route derived from the file's location.
    pub derived_slug: String,
    pub date: Option<DateTimeUtc>,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub excerpt: String,
    pub time_to_read: u32,
    /// Full plain text of the body, for excerpts of other lengths.
    pub text: String,
    pub source: PathBuf,
}

impl Entry {
    pub fn new(title: impl Into<String>, derived_slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            show: Value::Null,
            explicit_slug: None,
            derived_slug: derived_slug.into(),
            date: None,
            tags: Vec::new(),
            description: None,
            excerpt: String::new(),
            time_to_read: 1,
            text: String::new(),
            source: PathBuf::new(),
        }
    }

    /// Set the raw `show` value.
    pub fn with_show(mut self, show: impl Into<Value>) -> Self {
        self.show = show.into();
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.explicit_slug = Some(slug.into());
        self
    }

    pub fn with_date(mut self, date: DateTimeUtc) -> Self {
        self.date = Some(date);
        self
    }

    /// Visible iff `show` is exactly the string `"true"`.
    ///
    /// A boolean `true`, `"True"` or `"yes"` all hide the post.
    pub fn is_visible(&self) -> bool {
        matches!(&self.show, Value::String(s) if s == "true")
    }

    /// Explicit slug when non-empty, otherwise the derived slug.
    ///
    /// `None` when both are empty.
    pub fn route(&self) -> Option<&str> {
        self.explicit_slug
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| Some(self.derived_slug.as_str()).filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_visibility_is_literal() {
        let entry = Entry::new("Post", "/blog/post/");
        assert!(!entry.is_visible());
        assert!(entry.clone().with_show("true").is_visible());
        assert!(!entry.clone().with_show(true).is_visible());
        assert!(!entry.clone().with_show("True").is_visible());
        assert!(!entry.clone().with_show("yes").is_visible());
        assert!(!entry.clone().with_show(" true").is_visible());
        assert!(!entry.with_show(json!(["true"])).is_visible());
    }

    #[test]
    fn test_route_precedence() {
        let entry = Entry::new("Post", "/blog/post/");
        assert_eq!(entry.route(), Some("/blog/post/"));
        assert_eq!(entry.clone().with_slug("/custom/").route(), Some("/custom/"));
        assert_eq!(entry.with_slug("").route(), Some("/blog/post/"));
        assert_eq!(Entry::new("Orphan", "").route(), None);
        assert_eq!(Entry::new("Orphan", "").with_slug("/x/").route(), Some("/x/"));
    }
}
