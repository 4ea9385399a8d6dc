//! Bundler hints: import aliases and null-routed modules per stage.
//!
//! Written to `bundler.json` for the external bundler:
//!
//! ```json
//! {
//!   "aliases": { "@components": "/site/src/components" },
//!   "stages": {
//!     "develop": { "null_modules": [] },
//!     "build-html": { "null_modules": ["scrollreveal", "animejs"] }
//!   }
//! }
//! ```

use crate::config::{BuildStage, BundlerConfig, NullModuleRule};
use crate::utils::path::to_slash;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the bundler manifest inside the output directory.
pub const BUNDLER_MANIFEST: &str = "bundler.json";

/// Resolves aliased import specifiers against the site root.
#[derive(Debug, Clone)]
pub struct AliasTable {
    root: PathBuf,
    /// Longest prefix first so `@a/b` wins over `@a`.
    aliases: Vec<(String, PathBuf)>,
}

impl AliasTable {
    pub fn new(root: &Path, config: &BundlerConfig) -> Self {
        let mut aliases: Vec<_> = config
            .aliases
            .iter()
            .map(|(alias, target)| (alias.clone(), root.join(target)))
            .collect();
        aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Self {
            root: root.to_path_buf(),
            aliases,
        }
    }

    /// Map an import specifier to a path.
    ///
    /// `@templates/blog-post.js` -> `<root>/src/templates/blog-post.js`;
    /// unaliased specifiers resolve relative to the root.
    pub fn resolve(&self, specifier: &str) -> PathBuf {
        for (alias, target) in &self.aliases {
            if specifier == alias {
                return target.clone();
            }
            if let Some(rest) = specifier
                .strip_prefix(alias.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
            {
                return target.join(rest);
            }
        }
        self.root.join(specifier.trim_start_matches("./"))
    }

    /// Aliases with their resolved targets, sorted by alias.
    pub fn entries(&self) -> BTreeMap<&str, String> {
        self.aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), to_slash(target)))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StageHints {
    pub null_modules: Vec<String>,
}

/// Everything the bundler needs, per stage.
#[derive(Debug, Clone, Serialize)]
pub struct BundlerManifest {
    pub aliases: BTreeMap<String, String>,
    pub stages: BTreeMap<&'static str, StageHints>,
    #[serde(skip)]
    rules: Vec<(BuildStage, Regex)>,
}

impl BundlerManifest {
    /// Build the manifest; fails on an invalid null-module pattern.
    pub fn new(aliases: &AliasTable, config: &BundlerConfig) -> Result<Self> {
        let mut stages: BTreeMap<&'static str, StageHints> = BuildStage::ALL
            .iter()
            .map(|stage| (stage.as_str(), StageHints::default()))
            .collect();

        let mut rules = Vec::with_capacity(config.null_modules.len());
        for rule in &config.null_modules {
            rules.push(compile_rule(rule)?);
            stages
                .entry(rule.stage.as_str())
                .or_default()
                .null_modules
                .push(rule.test.clone());
        }

        Ok(Self {
            aliases: aliases
                .entries()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            stages,
            rules,
        })
    }

    /// Whether `import` is replaced by an empty module in `stage`.
    pub fn is_null_routed(&self, stage: BuildStage, import: &str) -> bool {
        self.rules
            .iter()
            .any(|(s, regex)| *s == stage && regex.is_match(import))
    }

    /// Write `bundler.json` into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        let path = dir.join(BUNDLER_MANIFEST);
        fs::write(&path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

fn compile_rule(rule: &NullModuleRule) -> Result<(BuildStage, Regex)> {
    let regex = Regex::new(&rule.test)
        .with_context(|| format!("Invalid null module pattern `{}`", rule.test))?;
    Ok((rule.stage, regex))
}
