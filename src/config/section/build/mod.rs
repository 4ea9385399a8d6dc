//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"         # Markdown source directory (relative to site root)
//! output = "public"           # Manifest output directory (relative to site root)
//!
//! [build.blog]
//! category = "/blog/"         # Regex matched against each post's absolute path
//! limit = 1000                # Maximum posts per pass
//! excerpt_length = 100        # Excerpt prune length (characters)
//! template = "@templates/blog-post.js"
//! pagination = "positional"   # positional | nearest
//!
//! [build.slug]
//! path = "no"                 # Derived slug segments: no | safe | ascii
//! separator = "dash"          # dash | underscore
//!
//! [build.bundler.aliases]
//! "@components" = "src/components"
//! ```
//!
//! See submodules for detailed options: [`blog`], [`slug`], [`bundler`].

mod blog;
mod bundler;
mod slug;

pub use blog::BlogConfig;
pub use bundler::{BuildStage, BundlerConfig, NullModuleRule};
pub use slug::{SlugConfig, SlugMode, SlugSeparator};

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source directory (Markdown files).
    pub content: PathBuf,

    /// Manifest output directory.
    pub output: PathBuf,

    /// Remove the output directory before writing (CLI only).
    #[serde(skip)]
    pub clean: bool,

    /// Blog post query and pagination settings.
    pub blog: BlogConfig,

    /// Derived slug settings.
    pub slug: SlugConfig,

    /// Import aliases and server-render null modules.
    pub bundler: BundlerConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            clean: false,
            blog: BlogConfig::default(),
            slug: SlugConfig::default(),
            bundler: BundlerConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const CONTENT: FieldPath = FieldPath::new("build.content");
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");

    /// Validate raw paths before they are joined onto the site root.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.content.is_absolute() {
            diag.error_with_hint(
                Self::CONTENT,
                format!("must be relative to the site root, got {}", self.content.display()),
                "use a path like \"content\"",
            );
        }
        if self.output.is_absolute() {
            diag.error_with_hint(
                Self::OUTPUT,
                format!("must be relative to the site root, got {}", self.output.display()),
                "use a path like \"public\"",
            );
        }
    }

    /// Validate normalized build settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.is_dir() {
            diag.error_with_hint(
                Self::CONTENT,
                format!("content directory {} does not exist", self.content.display()),
                "create it or point `build.content` at your markdown posts",
            );
        }
        if self.content == self.output {
            diag.error(Self::OUTPUT, "output directory must differ from content directory");
        }
        self.blog.validate(diag);
        self.bundler.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, Path::new("content"));
        assert_eq!(config.build.output, Path::new("public"));
        assert!(!config.build.clean);
    }

    #[test]
    fn test_validate_paths_rejects_absolute() {
        let config = test_parse_config("[build]\ncontent = \"/srv/content\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate_paths(&mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field, BuildSectionConfig::CONTENT);
    }

    #[test]
    fn test_validate_missing_content_dir() {
        let mut build = BuildSectionConfig::default();
        build.content = "/definitely/not/a/folio/content".into();
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
