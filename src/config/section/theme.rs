//! `[theme]` section configuration.
//!
//! Style tokens handed to the renderer plus the scroll-reveal defaults.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! nav_height = 100
//!
//! [theme.colors]
//! green = "#64ffda"
//! navy = "#0a192f"
//!
//! [theme.reveal]
//! origin = "bottom"
//! distance = "20px"
//! duration = 500
//! delay = 200
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Navigation bar height in pixels.
    pub nav_height: u32,

    /// Named color tokens (`#rgb` or `#rrggbb`).
    pub colors: BTreeMap<String, String>,

    /// Scroll-reveal animation defaults.
    pub reveal: RevealConfig,
}

impl Default for ThemeSectionConfig {
    fn default() -> Self {
        let colors = [
            ("green", "#64ffda"),
            ("navy", "#0a192f"),
            ("dark_navy", "#020c1b"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            nav_height: 100,
            colors,
            reveal: RevealConfig::default(),
        }
    }
}

impl ThemeSectionConfig {
    pub const COLORS: FieldPath = FieldPath::new("theme.colors");
    pub const NAV_HEIGHT: FieldPath = FieldPath::new("theme.nav_height");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (name, value) in &self.colors {
            if !is_hex_color(value) {
                diag.error_with_hint(
                    Self::COLORS,
                    format!("color '{name}' has invalid value '{value}'"),
                    "use a hex color like \"#64ffda\"",
                );
            }
        }
        if self.nav_height == 0 {
            diag.error(Self::NAV_HEIGHT, "nav height must be greater than 0");
        }
        self.reveal.validate(diag);
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

// ============================================================================
// Scroll reveal
// ============================================================================

/// Side an element reveals from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealOrigin {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

/// When the reveal delay applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseDelay {
    #[default]
    Always,
    Once,
    Onload,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rotate {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOffset {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// Scroll-reveal defaults, `[theme.reveal]`.
///
/// Sections ask for a copy with their own delay through [`RevealConfig::with_delay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub origin: RevealOrigin,
    /// CSS length, e.g. "20px".
    pub distance: String,
    /// Milliseconds.
    pub duration: u32,
    /// Milliseconds.
    pub delay: u32,
    pub rotate: Rotate,
    pub opacity: f32,
    pub scale: f32,
    pub easing: String,
    pub mobile: bool,
    pub reset: bool,
    pub use_delay: UseDelay,
    /// Fraction of the element that must be visible, 0.0..=1.0.
    pub view_factor: f32,
    pub view_offset: ViewOffset,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            origin: RevealOrigin::Bottom,
            distance: "20px".into(),
            duration: 500,
            delay: 200,
            rotate: Rotate::default(),
            opacity: 0.0,
            scale: 1.0,
            easing: "cubic-bezier(0.645, 0.045, 0.355, 1)".into(),
            mobile: true,
            reset: false,
            use_delay: UseDelay::Always,
            view_factor: 0.25,
            view_offset: ViewOffset::default(),
        }
    }
}

impl RevealConfig {
    pub const VIEW_FACTOR: FieldPath = FieldPath::new("theme.reveal.view_factor");
    pub const OPACITY: FieldPath = FieldPath::new("theme.reveal.opacity");

    /// Copy of these defaults with a different delay.
    pub fn with_delay(&self, delay: u32) -> Self {
        Self {
            delay,
            ..self.clone()
        }
    }

    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(0.0..=1.0).contains(&self.view_factor) {
            diag.error(
                Self::VIEW_FACTOR,
                format!("view factor {} is outside 0.0..=1.0", self.view_factor),
            );
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            diag.error(
                Self::OPACITY,
                format!("opacity {} is outside 0.0..=1.0", self.opacity),
            );
        }
    }
}
