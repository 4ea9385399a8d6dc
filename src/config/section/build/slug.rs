//! Derived slug configuration.

use serde::{Deserialize, Serialize};

/// How path segments are slugified when deriving a post's route.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Remove dangerous chars, preserve Unicode, whitespace becomes the separator.
    Safe,
    /// Transliterate Unicode to ASCII, lowercase, use separator.
    Ascii,
    /// No modification; keep segments exactly as on disk (default).
    #[default]
    No,
}

/// Separator character for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    /// Dash separator (`-`) (default).
    #[default]
    Dash,
    /// Underscore separator (`_`).
    Underscore,
}

impl SlugSeparator {
    /// Get the character representation.
    pub const fn as_char(&self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlugConfig {
    /// Slugify derived path segments.
    pub path: SlugMode,
    /// Separator character for spaces.
    pub separator: SlugSeparator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.slug.path, SlugMode::No);
        assert_eq!(config.build.slug.separator, SlugSeparator::Dash);
    }

    #[test]
    fn test_mode_parsing() {
        for (input, expected) in [
            ("safe", SlugMode::Safe),
            ("ascii", SlugMode::Ascii),
            ("no", SlugMode::No),
        ] {
            let config = test_parse_config(&format!("[build.slug]\npath = \"{input}\""));
            assert_eq!(config.build.slug.path, expected, "path failed for {input}");
        }
    }

    #[test]
    fn test_separator_parsing() {
        let config = test_parse_config("[build.slug]\nseparator = \"underscore\"");
        assert_eq!(config.build.slug.separator, SlugSeparator::Underscore);
        assert_eq!(config.build.slug.separator.as_char(), '_');
    }
}
