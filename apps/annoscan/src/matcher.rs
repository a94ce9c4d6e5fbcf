//! Line matchers for the log and comment scanners.
//!
//! A matcher looks at one line at a time and attributes it to at most one
//! category. Lines are never double-counted.

use crate::models::{Category, LogLevel, Marker};
use regex::Regex;

/// Classifies a single line of source text.
pub trait LineMatcher {
    type Category: Category;

    fn match_line(&self, line: &str) -> Option<Self::Category>;
}

/// Matches log calls with an empty argument list, e.g. `log.Error()`.
///
/// Calls that pass arguments (`log.Error("boom")`) are not reported; the
/// scanner only flags stubbed-out calls.
pub struct LogCallMatcher {
    re: Regex,
}

impl LogCallMatcher {
    pub fn new() -> Self {
        let alternatives = LogLevel::ALL
            .iter()
            .map(|l| regex::escape(l.label()))
            .collect::<Vec<_>>()
            .join("|");
        let re = Regex::new(&format!(r"log\.({})\(\)", alternatives))
            .expect("log call pattern is built from fixed labels");
        Self { re }
    }
}

impl Default for LogCallMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LineMatcher for LogCallMatcher {
    type Category = LogLevel;

    fn match_line(&self, line: &str) -> Option<LogLevel> {
        let caps = self.re.captures(line)?;
        LogLevel::from_label(caps.get(1)?.as_str())
    }
}

/// Matches `//` line comments mentioning a marker word (case-insensitive).
///
/// Only lines whose trimmed text starts with `//` are considered. Markers are
/// tried in declared priority order; the first one present wins.
#[derive(Default)]
pub struct CommentMarkerMatcher;

impl CommentMarkerMatcher {
    const COMMENT: &'static str = "//";

    pub fn new() -> Self {
        Self
    }
}

impl LineMatcher for CommentMarkerMatcher {
    type Category = Marker;

    fn match_line(&self, line: &str) -> Option<Marker> {
        let body = line.trim().strip_prefix(Self::COMMENT)?.to_lowercase();
        Marker::ALL
            .iter()
            .copied()
            .find(|m| body.contains(&m.label().to_lowercase()))
    }
}
