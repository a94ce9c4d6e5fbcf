//! Closed category sets for the two scanners.
//!
//! Each scanner classifies a matched line into exactly one category. The
//! category set is fixed at compile time; colour and label come from an
//! exhaustive `match`, so adding a variant forces every mapping to be updated.

use owo_colors::Style;
use std::fmt;

/// A fixed classification a matched line can be attributed to.
///
/// `ALL` lists the categories in declared order; reports and summaries
/// iterate in that order. The derived `Ord` must agree with it.
pub trait Category: Copy + Eq + Ord + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// Display label, also used as the JSON summary key.
    fn label(self) -> &'static str;

    /// Colour used for matched lines and the summary row.
    fn style(self) -> Style;

    /// Whether a single occurrence fails the run.
    fn is_disallowed(self) -> bool {
        false
    }
}

/// Severity of an empty-argument log call (`log.Error()` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Error,
    Trace,
    Info,
    Warn,
}

impl LogLevel {
    /// Map the method name of a log call back to its level.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.label() == s)
    }
}

impl Category for LogLevel {
    const ALL: &'static [Self] = &[
        LogLevel::Debug,
        LogLevel::Error,
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Warn,
    ];

    fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug",
            LogLevel::Error => "Error",
            LogLevel::Trace => "Trace",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warn",
        }
    }

    fn style(self) -> Style {
        match self {
            LogLevel::Debug => Style::new().green(),
            LogLevel::Error => Style::new().red(),
            LogLevel::Trace => Style::new().blue(),
            LogLevel::Info => Style::new().cyan(),
            LogLevel::Warn => Style::new().yellow(),
        }
    }
}

/// Comment marker word. Declaration order is match priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marker {
    Fixme,
    Todo,
}

impl Category for Marker {
    const ALL: &'static [Self] = &[Marker::Fixme, Marker::Todo];

    fn label(self) -> &'static str {
        match self {
            Marker::Fixme => "FIXME",
            Marker::Todo => "TODO",
        }
    }

    fn style(self) -> Style {
        match self {
            Marker::Fixme => Style::new().red(),
            Marker::Todo => Style::new().yellow(),
        }
    }

    fn is_disallowed(self) -> bool {
        matches!(self, Marker::Fixme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_by_declaration() {
        let mut levels = LogLevel::ALL.to_vec();
        levels.sort();
        assert_eq!(levels, LogLevel::ALL);
        let mut markers = Marker::ALL.to_vec();
        markers.sort();
        assert_eq!(markers, Marker::ALL);
    }

    #[test]
    fn test_only_fixme_is_disallowed() {
        assert!(Marker::Fixme.is_disallowed());
        assert!(!Marker::Todo.is_disallowed());
        assert!(LogLevel::ALL.iter().all(|l| !l.is_disallowed()));
    }

    #[test]
    fn test_log_level_from_label() {
        assert_eq!(LogLevel::from_label("Warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_label("warn"), None);
        assert_eq!(LogLevel::from_label("Fatal"), None);
    }
}
