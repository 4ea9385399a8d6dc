//! Derived slugs for content files.
//!
//! | Source (relative to content root) | Derived slug        |
//! |-----------------------------------|---------------------|
//! | `blog/hello.md`                   | `/blog/hello/`      |
//! | `blog/hello/index.md`             | `/blog/hello/`      |
//! | `index.md`                        | `/`                 |

use crate::config::{SlugConfig, SlugMode, SlugSeparator};
use std::path::{Component, Path};

/// Characters forbidden in URL path segments
const FORBIDDEN_CHARS: &[char] = &[
    '<', '>', ':', '|', '?', '*', '#', '\\', '(', ')', '[', ']', '"', '%', '&', '\t', '\r', '\n',
];

/// Derive the route of `file` from its location under `root`.
///
/// Returns an empty string when `file` is not under `root`.
pub fn derive_slug(root: &Path, file: &Path, config: &SlugConfig) -> String {
    let Ok(relative) = file.strip_prefix(root) else {
        return String::new();
    };

    let mut segments: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let stem = relative
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if stem != "index" {
        segments.push(stem);
    }

    let segments: Vec<String> = segments
        .iter()
        .map(|s| slugify_segment(s, config))
        .filter(|s| !s.is_empty())
        .collect();

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

/// Slugify one path segment according to the configured mode.
pub fn slugify_segment(segment: &str, config: &SlugConfig) -> String {
    match config.path {
        SlugMode::No => segment.to_owned(),
        SlugMode::Safe => sanitize_text(segment, config.separator),
        SlugMode::Ascii => ascii_slug(segment, config.separator),
    }
}

/// Remove forbidden characters and replace whitespace with the separator
fn sanitize_text(text: &str, separator: SlugSeparator) -> String {
    let sep = separator.as_char();
    let replaced: String = text
        .trim()
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .map(|c| if c.is_whitespace() { sep } else { c })
        .collect();
    collapse_separators(&replaced, sep)
}

/// Transliterate to ASCII, lowercase, non-alphanumerics become the separator
fn ascii_slug(text: &str, separator: SlugSeparator) -> String {
    let sep = separator.as_char();
    let replaced: String = deunicode::deunicode(text)
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { sep })
        .collect();
    collapse_separators(&replaced, sep)
}

fn collapse_separators(text: &str, sep: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == sep && (out.is_empty() || out.ends_with(sep)) {
            continue;
        }
        out.push(c);
    }
    while out.ends_with(sep) {
        out.pop();
    }
    out
}
