//! `[build.bundler]` import aliases and null-routed modules.
//!
//! # Example
//!
//! ```toml
//! [build.bundler.aliases]
//! "@components" = "src/components"
//! "@templates" = "src/templates"
//!
//! [[build.bundler.null_modules]]
//! stage = "build-html"
//! test = "scrollreveal"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Bundler build stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildStage {
    Develop,
    DevelopHtml,
    BuildJavascript,
    BuildHtml,
}

impl BuildStage {
    pub const ALL: [BuildStage; 4] = [
        Self::Develop,
        Self::DevelopHtml,
        Self::BuildJavascript,
        Self::BuildHtml,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Develop => "develop",
            Self::DevelopHtml => "develop-html",
            Self::BuildJavascript => "build-javascript",
            Self::BuildHtml => "build-html",
        }
    }
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modules matching `test` are replaced by an empty module in `stage`.
///
/// Used for browser-only libraries that break server rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullModuleRule {
    pub stage: BuildStage,
    /// Regex matched against the import path.
    pub test: String,
}

impl NullModuleRule {
    pub fn new(stage: BuildStage, test: impl Into<String>) -> Self {
        Self {
            stage,
            test: test.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlerConfig {
    /// Import prefix -> directory (relative to the site root).
    pub aliases: BTreeMap<String, PathBuf>,

    /// Null-routed modules per stage.
    pub null_modules: Vec<NullModuleRule>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        let aliases = [
            "components",
            "config",
            "content",
            "fonts",
            "images",
            "pages",
            "styles",
            "templates",
            "utils",
        ]
        .into_iter()
        .map(|dir| (format!("@{dir}"), PathBuf::from("src").join(dir)))
        .collect();

        Self {
            aliases,
            null_modules: vec![
                NullModuleRule::new(BuildStage::BuildHtml, "scrollreveal"),
                NullModuleRule::new(BuildStage::BuildHtml, "animejs"),
            ],
        }
    }
}

impl BundlerConfig {
    pub const ALIASES: FieldPath = FieldPath::new("build.bundler.aliases");
    pub const NULL_MODULES: FieldPath = FieldPath::new("build.bundler.null_modules");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (alias, target) in &self.aliases {
            if alias.is_empty() || alias.contains('/') {
                diag.error_with_hint(
                    Self::ALIASES,
                    format!("alias '{alias}' must be a single non-empty segment"),
                    "use a prefix like \"@components\"",
                );
            }
            if target.is_absolute() {
                diag.warn(
                    Self::ALIASES,
                    format!("alias '{alias}' points outside the site root: {}", target.display()),
                );
            }
        }
        for rule in &self.null_modules {
            if let Err(e) = regex::Regex::new(&rule.test) {
                diag.error(
                    Self::NULL_MODULES,
                    format!("invalid test pattern '{}' for {}: {e}", rule.test, rule.stage),
                );
            }
        }
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
        let bundler = &config.build.bundler;
        assert_eq!(bundler.aliases.len(), 9);
        assert_eq!(bundler.aliases["@templates"], Path::new("src/templates"));
        assert_eq!(bundler.null_modules.len(), 2);
        assert!(bundler.null_modules.iter().all(|r| r.stage == BuildStage::BuildHtml));
    }

    #[test]
    fn test_parse_rules() {
        let config = test_parse_config(
            "[build.bundler]\nnull_modules = [{ stage = \"develop-html\", test = \"^gsap\" }]",
        );
        assert_eq!(
            config.build.bundler.null_modules,
            vec![NullModuleRule::new(BuildStage::DevelopHtml, "^gsap")]
        );
    }

    #[test]
    fn test_validate() {
        let mut bundler = BundlerConfig::default();
        bundler.aliases.insert("@a/b".into(), "src/ab".into());
        bundler
            .null_modules
            .push(NullModuleRule::new(BuildStage::Develop, "[oops"));
        let mut diag = ConfigDiagnostics::new();
        bundler.validate(&mut diag);
        assert_eq!(diag.errors().len(), 2);
    }

    #[test]
    fn test_stage_names() {
        let names: Vec<_> = BuildStage::ALL.iter().map(BuildStage::as_str).collect();
        assert_eq!(
            names,
            ["develop", "develop-html", "build-javascript", "build-html"]
        );
    }
}
