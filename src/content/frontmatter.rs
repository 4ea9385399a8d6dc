//! Frontmatter extraction for markdown posts.
//!
//! Two formats are recognized at the very start of a file:
//!
//! ```text
//! ---                          +++
//! title: Hello                 title = "Hello"
//! show: 'true'                 show = "true"
//! tags: [rust, web]            tags = ["rust", "web"]
//! ---                          +++
//! ```
//!
//! Both are lowered into a JSON map first, so the known keys are read the
//! same way regardless of format. `show` keeps its raw value.

use serde_json::{Map, Value};
use thiserror::Error;

/// Keys read verbatim in YAML-like frontmatter, only quotes stripped.
const RAW_KEYS: &[&str] = &["title", "date", "slug", "description"];

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("invalid TOML frontmatter: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Metadata read from a post's frontmatter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub slug: Option<String>,
    /// Raw `show` value, compared literally against the string `"true"`.
    pub show: Value,
    pub tags: Vec<String>,
    pub description: Option<String>,
    /// Every other key, original case preserved.
    pub extra: Map<String, Value>,
}

impl Frontmatter {
    /// Split `content` into frontmatter and body.
    ///
    /// Returns `None` when the file has no frontmatter block.
    pub fn extract(content: &str) -> Result<Option<(Self, &str)>, FrontmatterError> {
        match detect_frontmatter(content) {
            Some((fm, body, is_toml)) => {
                let map = if is_toml {
                    parse_toml(fm)?
                } else {
                    parse_yaml_like(fm)
                };
                Ok(Some((Self::from_map(map), body)))
            }
            None => Ok(None),
        }
    }

    fn from_map(map: Map<String, Value>) -> Self {
        let mut meta = Self::default();

        for (key, value) in map {
            match key.to_lowercase().as_str() {
                "title" => meta.title = scalar_string(&value),
                "date" => meta.date = scalar_string(&value),
                "slug" => meta.slug = scalar_string(&value),
                "description" => meta.description = scalar_string(&value),
                "show" => meta.show = value,
                "tags" => meta.tags = string_list(value),
                _ => {
                    meta.extra.insert(key, value);
                }
            }
        }

        meta
    }
}

/// Detect and extract frontmatter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if trimmed.starts_with(fence)
            && let Some(end) = trimmed[3..].find(&format!("\n{fence}"))
        {
            let fm = trimmed[3..3 + end].trim();
            let body = trimmed[3 + end + 4..].trim_start_matches(['\r', '\n']);
            return Some((fm, body, is_toml));
        }
    }

    None
}

/// Parse TOML frontmatter into a JSON map.
fn parse_toml(content: &str) -> Result<Map<String, Value>, FrontmatterError> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(table
        .into_iter()
        .map(|(k, v)| (k, toml_to_json(v)))
        .collect())
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Parse simple YAML-like frontmatter (`key: value`).
///
/// A key with an empty value followed by `- item` lines becomes an array.
fn parse_yaml_like(content: &str) -> Map<String, Value> {
    let mut map = Map::new();
    let mut lines = content.lines().peekable();

    while let Some(line) = lines.next() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_string();
        let value = value.trim();

        if value.is_empty() {
            let mut items = Vec::new();
            while let Some(item) = lines.peek().and_then(|l| l.trim().strip_prefix('-')) {
                items.push(parse_yaml_value(item.trim()));
                lines.next();
            }
            let value = if items.is_empty() {
                Value::Null
            } else {
                Value::Array(items)
            };
            map.insert(key, value);
        } else if RAW_KEYS.contains(&key.to_lowercase().as_str()) {
            let raw = unquote(value).unwrap_or(value);
            map.insert(key, Value::String(raw.to_string()));
        } else {
            map.insert(key, parse_yaml_value(value));
        }
    }

    map
}

/// Parse a YAML-like value string to JSON value
///
/// Supports:
/// - Quoted strings: `'true'`, `"a, b"` -> always strings
/// - Booleans: `true`, `false`
/// - Null: `null`, `~`
/// - Numbers: `123`, `3.14`
/// - Arrays: `[a, b]` or `a, b` -> `["a", "b"]`
/// - Strings: everything else
fn parse_yaml_value(s: &str) -> Value {
    if let Some(inner) = unquote(s) {
        return Value::String(inner.to_string());
    }

    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if s.eq_ignore_ascii_case("null") || s == "~" {
        return Value::Null;
    }

    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }

    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }

    if let Some(inner) = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return Value::Array(split_items(inner));
    }

    if s.contains(',') {
        return Value::Array(split_items(s));
    }

    Value::String(s.to_string())
}

fn split_items(s: &str) -> Vec<Value> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| Value::String(unquote(item).unwrap_or(item).to_string()))
        .collect()
}

/// Strip one pair of matching single or double quotes.
fn unquote(s: &str) -> Option<&str> {
    ['\'', '"'].into_iter().find_map(|q| {
        (s.len() >= 2)
            .then(|| s.strip_prefix(q)?.strip_suffix(q))
            .flatten()
    })
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(scalar_string).collect(),
        Value::String(s) => s
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        other => scalar_string(&other).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(content: &str) -> (Frontmatter, &str) {
        Frontmatter::extract(content).unwrap().unwrap()
    }

    #[test]
    fn test_yaml_frontmatter() {
        let (meta, body) =
            extract("---\ntitle: Hello\ndate: 2024-01-01\ntags: a, b\n---\n\n# Body");
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.date.as_deref(), Some("2024-01-01"));
        assert_eq!(meta.tags, ["a", "b"]);
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_toml_frontmatter() {
        let (meta, body) = extract(
            "+++\ntitle = \"Hello\"\ndate = 2024-01-01\ntags = [\"a\", \"b\"]\nshow = \"true\"\n+++\n\nBody",
        );
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.date.as_deref(), Some("2024-01-01"));
        assert_eq!(meta.tags, ["a", "b"]);
        assert_eq!(meta.show, json!("true"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_scalar_keys_stay_verbatim() {
        let (meta, _) = extract(
            "---\ntitle: Hello, world\ndescription: One, two\nslug: /a,b/\n---\n",
        );
        assert_eq!(meta.title.as_deref(), Some("Hello, world"));
        assert_eq!(meta.description.as_deref(), Some("One, two"));
        assert_eq!(meta.slug.as_deref(), Some("/a,b/"));

        let (meta, _) = extract("---\ntitle: 3.10\nDate: 2024-01-01\n---\n");
        assert_eq!(meta.title.as_deref(), Some("3.10"));
        assert_eq!(meta.date.as_deref(), Some("2024-01-01"));

        let (meta, _) = extract("---\ntitle: 'true'\ntags: a, b\n---\n");
        assert_eq!(meta.title.as_deref(), Some("true"));
        assert_eq!(meta.tags, ["a", "b"]);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Frontmatter::extract("+++\ntitle = \n+++\n");
        assert!(matches!(result, Err(FrontmatterError::Toml(_))));
    }

    #[test]
    fn test_no_frontmatter() {
        assert!(Frontmatter::extract("# Just content").unwrap().is_none());
        assert!(Frontmatter::extract("---\nnever closed").unwrap().is_none());
    }

    #[test]
    fn test_show_keeps_raw_value() {
        let cases = [
            ("show: 'true'", json!("true")),
            ("show: \"true\"", json!("true")),
            ("show: true", json!(true)),
            ("show: True", json!(true)),
            ("show: yes", json!("yes")),
            ("show: 'True'", json!("True")),
        ];
        for (line, expected) in cases {
            let (meta, _) = extract(&format!("---\n{line}\n---\n"));
            assert_eq!(meta.show, expected, "{line}");
        }

        let (meta, _) = extract("---\ntitle: No flag\n---\n");
        assert_eq!(meta.show, Value::Null);
    }

    #[test]
    fn test_yaml_lists() {
        let (meta, _) = extract("---\ntags: [rust, 'web dev']\n---\n");
        assert_eq!(meta.tags, ["rust", "web dev"]);

        let (meta, _) = extract("---\ntags:\n  - rust\n  - web\ntitle: Lists\n---\n");
        assert_eq!(meta.tags, ["rust", "web"]);
        assert_eq!(meta.title.as_deref(), Some("Lists"));
    }

    #[test]
    fn test_quoted_title_with_colon() {
        let (meta, _) = extract("---\ntitle: 'Rust: a primer'\nslug: /rust-primer/\n---\n");
        assert_eq!(meta.title.as_deref(), Some("Rust: a primer"));
        assert_eq!(meta.slug.as_deref(), Some("/rust-primer/"));
    }

    #[test]
    fn test_extra_fields() {
        let (meta, _) = extract(
            "---\ntitle: Hello\ncustom: world\ncount: 42\nflag: true\nitems: x, y, z\n---\n",
        );
        assert_eq!(meta.extra.get("custom"), Some(&json!("world")));
        assert_eq!(meta.extra.get("count"), Some(&json!(42)));
        assert_eq!(meta.extra.get("flag"), Some(&json!(true)));
        assert_eq!(meta.extra.get("items"), Some(&json!(["x", "y", "z"])));
    }
}
