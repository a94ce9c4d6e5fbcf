//! Data models for scan results: matches, tallies and the final report.

pub mod category;

pub use category::{Category, LogLevel, Marker};

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Which scanner produced a report. Drives the banner and the JSON `variant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scanner {
    Logs,
    Todos,
}

impl Scanner {
    pub fn name(self) -> &'static str {
        match self {
            Scanner::Logs => "logs",
            Scanner::Todos => "todos",
        }
    }
}

/// A single matched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<C> {
    pub path: PathBuf,
    /// 1-based.
    pub line_number: usize,
    /// Line as read, without the trailing newline.
    pub line: String,
    pub category: C,
}

/// Per-category match counts for one scan.
///
/// Every category in `C::ALL` is present from construction, so the summary
/// always lists all of them, zero or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<C: Category> {
    counts: BTreeMap<C, usize>,
}

impl<C: Category> Default for Tally<C> {
    fn default() -> Self {
        Self {
            counts: C::ALL.iter().map(|c| (*c, 0)).collect(),
        }
    }
}

impl<C: Category> Tally<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, category: C) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    pub fn get(&self, category: C) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts in declared category order.
    pub fn iter(&self) -> impl Iterator<Item = (C, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }
}

/// A target that could not be read; the scan continued without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of scanning a batch of targets.
#[derive(Debug, Clone)]
pub struct ScanReport<C: Category> {
    pub files_scanned: usize,
    pub matches: Vec<MatchResult<C>>,
    pub tally: Tally<C>,
    pub errors: Vec<FileError>,
}

impl<C: Category> Default for ScanReport<C> {
    fn default() -> Self {
        Self {
            files_scanned: 0,
            matches: Vec::new(),
            tally: Tally::new(),
            errors: Vec::new(),
        }
    }
}

impl<C: Category> ScanReport<C> {
    pub fn record(&mut self, m: MatchResult<C>) {
        self.tally.increment(m.category);
        self.matches.push(m);
    }

    /// True when any disallowed category was seen at least once.
    pub fn failed(&self) -> bool {
        self.tally
            .iter()
            .any(|(c, n)| c.is_disallowed() && n > 0)
    }
}
