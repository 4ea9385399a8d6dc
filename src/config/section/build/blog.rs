//! `[build.blog]` post query and pagination settings.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::plan::PaginationMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Regex matched against each markdown file's absolute path.
    pub category: String,

    /// Maximum number of posts per pass (applied after sorting).
    pub limit: usize,

    /// Excerpt prune length in characters.
    pub excerpt_length: usize,

    /// Import specifier of the single-post template component.
    pub template: String,

    /// How previous/next links are chosen.
    pub pagination: PaginationMode,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            category: "/blog/".into(),
            limit: 1000,
            excerpt_length: 100,
            template: "@templates/blog-post.js".into(),
            pagination: PaginationMode::default(),
        }
    }
}

impl BlogConfig {
    pub const CATEGORY: FieldPath = FieldPath::new("build.blog.category");
    pub const LIMIT: FieldPath = FieldPath::new("build.blog.limit");
    pub const EXCERPT_LENGTH: FieldPath = FieldPath::new("build.blog.excerpt_length");
    pub const TEMPLATE: FieldPath = FieldPath::new("build.blog.template");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Err(e) = regex::Regex::new(&self.category) {
            diag.error_with_hint(
                Self::CATEGORY,
                format!("invalid regex: {e}"),
                "use a path pattern like \"/blog/\"",
            );
        }
        if self.limit == 0 {
            diag.warn(Self::LIMIT, "limit is 0, no posts will be planned");
        }
        if self.excerpt_length == 0 {
            diag.error(Self::EXCERPT_LENGTH, "excerpt length must be greater than 0");
        }
        if self.template.trim().is_empty() {
            diag.error(Self::TEMPLATE, "template must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let blog = &config.build.blog;
        assert_eq!(blog.category, "/blog/");
        assert_eq!(blog.limit, 1000);
        assert_eq!(blog.excerpt_length, 100);
        assert_eq!(blog.template, "@templates/blog-post.js");
        assert_eq!(blog.pagination, PaginationMode::Positional);
    }

    #[test]
    fn test_parse_nearest() {
        let config = test_parse_config("[build.blog]\npagination = \"nearest\"\nlimit = 20");
        assert_eq!(config.build.blog.pagination, PaginationMode::Nearest);
        assert_eq!(config.build.blog.limit, 20);
    }

    #[test]
    fn test_validate() {
        let config = test_parse_config("[build.blog]\ncategory = \"(blog\"\nexcerpt_length = 0");
        let mut diag = ConfigDiagnostics::new();
        config.build.blog.validate(&mut diag);
        assert_eq!(diag.errors().len(), 2);
        assert_eq!(diag.errors()[0].field, BlogConfig::CATEGORY);
    }
}
