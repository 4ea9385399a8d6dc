//! Blog post query.
//!
//! Walks the content directory, keeps markdown files whose absolute path
//! matches the category pattern, parses them in parallel and returns them
//! newest first:
//!
//! ```text
//! content/ ──walk──► *.md ──category──► parse (rayon) ──sort date desc──► limit
//! ```
//!
//! Any per-file failure fails the whole query; every failing file is
//! reported, not just the first.

use super::{Entry, excerpt, frontmatter::Frontmatter, slug::derive_slug};
use crate::config::{SiteConfig, SlugConfig};
use crate::logger::ProgressLine;
use crate::utils::date::DateTimeUtc;
use crate::utils::path::to_slash;
use crate::utils::plural_count;
use jwalk::WalkDir;
use rayon::prelude::*;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

const IGNORED_FILES: &[&str] = &[".DS_Store"];
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Progress counter name used by [`ContentQuery::run`].
pub const PROGRESS_COUNTER: &str = "markdown";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("content directory `{}` not found", .0.display())]
    MissingRoot(PathBuf),

    #[error("invalid category pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{} failed to load:\n{}", plural_count(.0.len(), "content file"), format_issues(.0))]
    Files(Vec<FileIssue>),
}

/// A file that could not be turned into an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIssue {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for FileIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

fn format_issues(issues: &[FileIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Query parameters for one pass.
#[derive(Debug, Clone)]
pub struct ContentQuery {
    pub root: PathBuf,
    /// Regex matched against each file's absolute `/`-separated path.
    pub category: String,
    pub limit: usize,
    pub excerpt_length: usize,
    pub slug: SlugConfig,
}

impl ContentQuery {
    pub fn from_config(config: &SiteConfig) -> Self {
        let blog = &config.build.blog;
        Self {
            root: config.build.content.clone(),
            category: blog.category.clone(),
            limit: blog.limit,
            excerpt_length: blog.excerpt_length,
            slug: config.build.slug,
        }
    }

    /// Markdown files under the root whose path matches the category.
    ///
    /// Sorted by path so later stages see a deterministic order.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>, QueryError> {
        if !self.root.is_dir() {
            return Err(QueryError::MissingRoot(self.root.clone()));
        }

        let category = Regex::new(&self.category).map_err(|source| QueryError::Pattern {
            pattern: self.category.clone(),
            source,
        })?;

        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                let name = e.file_name().to_str().unwrap_or_default();
                !IGNORED_FILES.contains(&name)
            })
            .map(|e| e.path())
            .filter(|path| is_markdown(path))
            .filter(|path| category.is_match(&to_slash(path)))
            .collect();

        files.sort();
        Ok(files)
    }

    /// Run the query: parse, sort newest first, apply the limit.
    pub fn run(&self, progress: Option<&ProgressLine>) -> Result<Vec<Entry>, QueryError> {
        let files = self.collect_files()?;
        self.load(&files, progress)
    }

    /// Parse the given files into sorted, limited entries.
    pub fn load(
        &self,
        files: &[PathBuf],
        progress: Option<&ProgressLine>,
    ) -> Result<Vec<Entry>, QueryError> {
        let results: Vec<Result<Entry, FileIssue>> = files
            .par_iter()
            .map(|path| {
                let result = self.parse_file(path);
                if let Some(p) = progress {
                    p.inc(PROGRESS_COUNTER);
                }
                result
            })
            .collect();

        let mut entries = Vec::with_capacity(results.len());
        let mut issues = Vec::new();
        for result in results {
            match result {
                Ok(entry) => entries.push(entry),
                Err(issue) => issues.push(issue),
            }
        }
        if !issues.is_empty() {
            return Err(QueryError::Files(issues));
        }

        sort_newest_first(&mut entries);
        entries.truncate(self.limit);
        Ok(entries)
    }

    fn parse_file(&self, path: &Path) -> Result<Entry, FileIssue> {
        let issue = |message: String| FileIssue {
            path: path.to_path_buf(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| issue(e.to_string()))?;
        let (meta, body) = Frontmatter::extract(&content)
            .map_err(|e| issue(e.to_string()))?
            .unwrap_or_else(|| (Frontmatter::default(), content.as_str()));

        let date = match meta.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                DateTimeUtc::parse(raw).ok_or_else(|| issue(format!("invalid date `{raw}`")))?,
            ),
        };

        let text = excerpt::plain_text(body);
        Ok(Entry {
            title: meta.title.unwrap_or_default(),
            show: meta.show,
            explicit_slug: meta.slug,
            derived_slug: derive_slug(&self.root, path, &self.slug),
            date,
            tags: meta.tags,
            description: meta.description,
            excerpt: excerpt::prune(&text, self.excerpt_length),
            time_to_read: excerpt::time_to_read(&text),
            text,
            source: path.to_path_buf(),
        })
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

/// Date descending, undated last; the sort is stable so ties keep input order.
fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| match (a.date, b.date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn post(title: &str, date: &str, show: &str) -> String {
        format!("---\ntitle: {title}\ndate: {date}\nshow: {show}\n---\n\nBody of {title}.\n")
    }

    fn query(root: &Path) -> ContentQuery {
        ContentQuery {
            root: root.to_path_buf(),
            category: "/blog/".into(),
            limit: 1000,
            excerpt_length: 100,
            slug: SlugConfig::default(),
        }
    }

    fn titles(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_filters_category_and_sorts() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "blog/old.md", &post("Old", "2019-01-01", "'true'"));
        write(dir.path(), "blog/new.md", &post("New", "2020-06-01", "'true'"));
        write(dir.path(), "blog/mid/index.md", &post("Mid", "2019-06-01", "true"));
        write(dir.path(), "projects/app.md", &post("App", "2021-01-01", "'true'"));
        write(dir.path(), "blog/notes.txt", "not markdown");
        write(dir.path(), "blog/.DS_Store", "");

        let entries = query(dir.path()).run(None).unwrap();
        assert_eq!(titles(&entries), ["New", "Mid", "Old"]);
        assert_eq!(entries[1].derived_slug, "/blog/mid/");
        assert_eq!(entries[0].show, json!("true"));
        assert_eq!(entries[1].show, json!(true));
        assert!(entries[0].is_visible());
        assert!(!entries[1].is_visible());
    }

    #[test]
    fn test_undated_sort_last_and_ties_keep_path_order() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "blog/b.md", "---\ntitle: B\n---\nbody");
        write(dir.path(), "blog/a.md", "---\ntitle: A\n---\nbody");
        write(dir.path(), "blog/d.md", &post("D", "2020-01-01", "'true'"));
        write(dir.path(), "blog/c.md", &post("C", "2020-01-01", "'true'"));

        let entries = query(dir.path()).run(None).unwrap();
        assert_eq!(titles(&entries), ["C", "D", "A", "B"]);
    }

    #[test]
    fn test_limit_applies_after_sort() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "blog/a.md", &post("A", "2018-01-01", "'true'"));
        write(dir.path(), "blog/b.md", &post("B", "2020-01-01", "'true'"));
        write(dir.path(), "blog/c.md", &post("C", "2019-01-01", "'true'"));

        let mut q = query(dir.path());
        q.limit = 2;
        assert_eq!(titles(&q.run(None).unwrap()), ["B", "C"]);
    }

    #[test]
    fn test_excerpt_and_time_to_read() {
        let dir = TempDir::new().unwrap();
        let body = "word ".repeat(600);
        write(
            dir.path(),
            "blog/long.md",
            &format!("---\ntitle: Long\nslug: /long/\n---\n{body}"),
        );

        let entries = query(dir.path()).run(None).unwrap();
        let entry = &entries[0];
        assert!(entry.excerpt.ends_with('…'));
        assert!(entry.excerpt.chars().count() <= 101);
        assert_eq!(entry.time_to_read, 2);
        assert_eq!(entry.explicit_slug.as_deref(), Some("/long/"));
        assert_eq!(entry.route(), Some("/long/"));
    }

    #[test]
    fn test_collects_every_failing_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "blog/ok.md", &post("Ok", "2020-01-01", "'true'"));
        write(dir.path(), "blog/bad-date.md", &post("Bad", "someday", "'true'"));
        write(dir.path(), "blog/bad-toml.md", "+++\ntitle = \n+++\n");

        let err = query(dir.path()).run(None).unwrap_err();
        let QueryError::Files(issues) = &err else {
            panic!("expected file issues, got {err:?}");
        };
        assert_eq!(issues.len(), 2);
        assert!(issues[0].path.ends_with("bad-date.md"));
        assert!(issues[0].message.contains("someday"));
        assert!(issues[1].path.ends_with("bad-toml.md"));
        assert!(err.to_string().starts_with("2 content files failed to load"));
    }

    #[test]
    fn test_offset_dates_sort_in_utc() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "blog/a.md", &post("A", "2019-11-24T10:00:00+05:30", "'true'"));
        write(dir.path(), "blog/b.md", &post("B", "2019-11-24T06:00:00Z", "'true'"));
        write(
            dir.path(),
            "blog/c.md",
            "+++\ntitle = \"C\"\ndate = 2019-11-24T03:00:00-02:00\nshow = \"true\"\n+++\n",
        );

        let entries = query(dir.path()).run(None).unwrap();
        assert_eq!(titles(&entries), ["B", "C", "A"]);
        assert_eq!(
            entries[2].date,
            Some(DateTimeUtc::new(2019, 11, 24, 4, 30, 0))
        );
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = query(&dir.path().join("nope")).run(None).unwrap_err();
        assert!(matches!(err, QueryError::MissingRoot(_)));
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        let mut q = query(dir.path());
        q.category = "(blog".into();
        assert!(matches!(q.run(None), Err(QueryError::Pattern { .. })));
    }

    #[test]
    fn test_empty_blog() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "about.md", "---\ntitle: About\n---\n");
        assert!(query(dir.path()).run(None).unwrap().is_empty());
    }

    #[test]
    fn test_progress_counts_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "blog/a.md", &post("A", "2020-01-01", "'true'"));
        write(dir.path(), "blog/b.md", &post("B", "2020-01-02", "'true'"));

        let q = query(dir.path());
        let files = q.collect_files().unwrap();
        let progress = ProgressLine::new("content", &[(PROGRESS_COUNTER, files.len())]);
        let entries = q.load(&files, Some(&progress)).unwrap();
        assert_eq!(progress.line(), "markdown(2/2)");
        progress.finish();
        assert_eq!(entries.len(), 2);
    }
}
