//! Path patterns used by `[[paths]]` rules.
//!
//! A pattern is a `/`-separated path relative to the project root. Two
//! wildcards are supported:
//!
//! - `**` matches any number of directories, including none
//! - `*` matches any run of characters within a single segment
//!
//! Every wildcard is a capture. A file matched by the reference pattern is
//! mapped to its localized counterpart by substituting the captures, in
//! order, into the l10n pattern (and the other way around).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::warn;
use walkdir::WalkDir;

use crate::utils::{normalize_path, to_slash};

/// Placeholder replaced by the locale code when a pattern is resolved.
pub const LOCALE_PLACEHOLDER: &str = "{locale}";

/// Kind of a wildcard, used to check that two patterns can be mapped onto each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    /// `*` inside a segment.
    Star,
    /// `**/` followed by more segments.
    Dirs,
    /// `**` as the last segment.
    Rest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Wildcard(Wildcard),
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    while !rest.is_empty() {
        let (token, len) = if rest.starts_with("**/") {
            (Some(Wildcard::Dirs), 3)
        } else if rest == "**" {
            (Some(Wildcard::Rest), 2)
        } else if rest.starts_with('*') {
            (Some(Wildcard::Star), 1)
        } else {
            (None, rest.chars().next().map_or(1, char::len_utf8))
        };

        match token {
            Some(wildcard) => {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Wildcard(wildcard));
            }
            None => literal.push_str(&rest[..len]),
        }
        rest = &rest[len..];
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

/// An unresolved path pattern, possibly still containing `{locale}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    root: PathBuf,
    pattern: String,
}

impl PathPattern {
    /// Create a pattern anchored at `root`.
    ///
    /// Empty and `.` segments are dropped. A leading `/` makes the pattern
    /// absolute and `root` is ignored.
    pub fn new(root: &Path, pattern: &str) -> Self {
        let root = if pattern.starts_with('/') {
            PathBuf::from("/")
        } else {
            root.to_path_buf()
        };
        let pattern = pattern
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect::<Vec<_>>()
            .join("/");
        Self { root, pattern }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The normalized pattern text, relative to [`Self::root`].
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn contains_locale(&self) -> bool {
        self.pattern.contains(LOCALE_PLACEHOLDER)
    }

    /// Wildcards in the order they appear.
    pub fn wildcards(&self) -> Vec<Wildcard> {
        tokenize(&self.pattern)
            .into_iter()
            .filter_map(|token| match token {
                Token::Wildcard(w) => Some(w),
                Token::Literal(_) => None,
            })
            .collect()
    }

    /// Substitute `{locale}` and compile the pattern for matching.
    pub fn resolve(&self, locale: &str) -> Result<ResolvedPattern> {
        let pattern = self.pattern.replace(LOCALE_PLACEHOLDER, locale);
        let segments: Vec<&str> = pattern.split('/').collect();

        // Literal directories before the first wildcard form the walk root.
        let prefix_len = segments
            .iter()
            .position(|segment| segment.contains('*'))
            .unwrap_or(segments.len());

        let prefix: PathBuf = segments[..prefix_len].iter().collect();
        let base_dir = normalize_path(&self.root.join(prefix));

        if prefix_len == segments.len() {
            return Ok(ResolvedPattern {
                base_dir,
                tokens: Vec::new(),
                regex: None,
            });
        }

        let tokens = tokenize(&segments[prefix_len..].join("/"));
        let mut source = String::from("^");
        for token in &tokens {
            match token {
                Token::Literal(text) => source.push_str(&regex::escape(text)),
                Token::Wildcard(Wildcard::Star) => source.push_str("([^/]*)"),
                Token::Wildcard(Wildcard::Dirs) => source.push_str("((?:[^/]+/)*)"),
                Token::Wildcard(Wildcard::Rest) => source.push_str("(.*)"),
            }
        }
        source.push('$');

        let regex = Regex::new(&source)
            .with_context(|| format!("Invalid path pattern: \"{}\"", pattern))?;

        Ok(ResolvedPattern {
            base_dir,
            tokens,
            regex: Some(regex),
        })
    }
}

/// A pattern with the locale substituted, ready to match and expand paths.
#[derive(Debug, Clone)]
pub struct ResolvedPattern {
    /// Directory the wildcard part is relative to. For a pattern without
    /// wildcards this is the single file it names.
    base_dir: PathBuf,
    tokens: Vec<Token>,
    regex: Option<Regex>,
}

impl ResolvedPattern {
    pub fn is_literal(&self) -> bool {
        self.regex.is_none()
    }

    /// Match `path` and return the wildcard captures.
    pub fn captures(&self, path: &Path) -> Option<Vec<String>> {
        let Some(regex) = &self.regex else {
            return (normalize_path(path) == self.base_dir).then(Vec::new);
        };
        let relative = normalize_path(path)
            .strip_prefix(&self.base_dir)
            .ok()
            .map(to_slash)?;
        let caps = regex.captures(&relative)?;
        Some(
            caps.iter()
                .skip(1)
                .map(|m| m.map_or_else(String::new, |m| m.as_str().to_string()))
                .collect(),
        )
    }

    /// Build the path this pattern produces for the given captures.
    ///
    /// Missing captures expand to nothing.
    pub fn expand(&self, captures: &[String]) -> PathBuf {
        if self.regex.is_none() {
            return self.base_dir.clone();
        }
        let mut captures = captures.iter();
        let mut rendered = String::new();
        for token in &self.tokens {
            match token {
                Token::Literal(text) => rendered.push_str(text),
                Token::Wildcard(_) => {
                    if let Some(capture) = captures.next() {
                        rendered.push_str(capture);
                    }
                }
            }
        }
        self.base_dir.join(rendered)
    }

    /// Files on disk matching this pattern, with their captures, in sorted order.
    ///
    /// A literal pattern always yields its single path, whether it exists or not.
    pub fn files(&self) -> Vec<(PathBuf, Vec<String>)> {
        if self.regex.is_none() {
            return vec![(self.base_dir.clone(), Vec::new())];
        }
        if !self.base_dir.is_dir() {
            return Vec::new();
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.base_dir).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Cannot access path: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(captures) = self.captures(entry.path()) {
                files.push((entry.path().to_path_buf(), captures));
            }
        }
        files
    }
}
