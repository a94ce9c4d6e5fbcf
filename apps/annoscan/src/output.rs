//! Output rendering for scan results.
//!
//! Supports `human` (default) and `json` outputs. Human output streams one
//! line per match as the scan runs and ends with a per-category summary; the
//! JSON form is a single document written after the scan.

use crate::models::{Category, ScanReport, Scanner};
use crate::scan::ScanEvent;
use crate::utils;
use owo_colors::{OwoColorize, Style};
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

const RULE: &str = "**************************************************";

/// Whether ANSI styling should be applied for this run.
pub fn use_colors(output: &str, no_color: bool) -> bool {
    output != "json" && !no_color && utils::colors_enabled()
}

fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Render one progress event as a human line; `None` for events printed elsewhere.
pub fn render_event<C: Category>(event: &ScanEvent<'_, C>, color: bool) -> Option<String> {
    match event {
        ScanEvent::Checking(path) => Some(paint(
            &format!("Checking: {}", path.display()),
            Style::new().bright_black(),
            color,
        )),
        ScanEvent::Match(m) => Some(format!(
            "{}:{} -> {}",
            utils::basename(&m.path),
            m.line_number,
            paint(m.line.trim(), m.category.style(), color)
        )),
        ScanEvent::ReadFailed(_) => None,
    }
}

/// Print a progress event as it happens. Read failures go to stderr.
pub fn print_event<C: Category>(event: &ScanEvent<'_, C>, color: bool) {
    if let ScanEvent::ReadFailed(fe) = event {
        eprintln!("{} {}", utils::error_prefix(color), fe.message);
        return;
    }
    if let Some(line) = render_event(event, color) {
        println!("{}", line);
    }
}

/// Compose the summary block (pure) for testing purposes.
pub fn compose_summary<C: Category>(
    report: &ScanReport<C>,
    scanner: Scanner,
    color: bool,
) -> Vec<String> {
    let mut out = vec![String::new(), String::new(), "Results:".to_string()];
    for (category, count) in report.tally.iter() {
        let mut style = category.style().bold();
        if count > 0 {
            style = style.italic();
        }
        out.push(paint(
            &format!("{}: {}", category.label(), count),
            style,
            color,
        ));
    }
    match scanner {
        Scanner::Logs => {
            out.push(String::new());
            out.push(RULE.to_string());
            out.push(paint(
                "Please review the logs and keep them to a minimum.",
                Style::new().cyan().bold(),
                color,
            ));
            out.push(RULE.to_string());
        }
        Scanner::Todos => {
            if report.failed() {
                out.push(paint(
                    "Error: Found FIXME comments. Please address them before continuing.",
                    Style::new().red(),
                    color,
                ));
            }
        }
    }
    if !report.errors.is_empty() {
        out.push(format!(
            "{} {} file(s) could not be read",
            utils::note_prefix(color),
            report.errors.len()
        ));
    }
    out
}

/// Print the summary block for human output.
pub fn print_summary<C: Category>(report: &ScanReport<C>, scanner: Scanner, color: bool) {
    for line in compose_summary(report, scanner, color) {
        println!("{}", line);
    }
}

fn display_path(path: &Path, base: &Path) -> String {
    if path.is_relative() {
        return path.to_string_lossy().to_string();
    }
    pathdiff::diff_paths(path, base)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

/// Compose scan JSON object (pure) for testing/snapshot purposes.
///
/// Absolute paths are shown relative to `base`.
pub fn compose_scan_json<C: Category>(
    report: &ScanReport<C>,
    scanner: Scanner,
    base: &Path,
) -> JsonVal {
    let matches: Vec<_> = report
        .matches
        .iter()
        .map(|m| {
            json!({
                "file": display_path(&m.path, base),
                "line": m.line_number,
                "text": m.line.trim(),
                "category": m.category.label(),
            })
        })
        .collect();
    let mut summary = serde_json::Map::new();
    for (category, count) in report.tally.iter() {
        summary.insert(category.label().to_string(), json!(count));
    }
    let errors: Vec<_> = report
        .errors
        .iter()
        .map(|e| json!({"file": display_path(&e.path, base), "message": e.message}))
        .collect();
    json!({
        "variant": scanner.name(),
        "files": report.files_scanned,
        "matches": matches,
        "summary": summary,
        "errors": errors,
        "failed": report.failed(),
    })
}

pub fn print_json<C: Category>(report: &ScanReport<C>, scanner: Scanner, base: &Path) {
    let out = compose_scan_json(report, scanner, base);
    match serde_json::to_string_pretty(&out) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("{} {}", utils::error_prefix(false), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileError, LogLevel, MatchResult, Marker};
    use std::path::PathBuf;

    fn todo_report() -> ScanReport<Marker> {
        let mut r = ScanReport::default();
        r.files_scanned = 2;
        r.record(MatchResult {
            path: PathBuf::from("/repo/builder/pkg/app.go"),
            line_number: 12,
            line: "    // FIXME: leak  ".into(),
            category: Marker::Fixme,
        });
        r.errors.push(FileError {
            path: PathBuf::from("/repo/builder/gone.go"),
            message: "failed to read".into(),
        });
        r
    }

    #[test]
    fn test_render_match_uses_basename_and_trimmed_line() {
        let r = todo_report();
        let line = render_event(&ScanEvent::Match(&r.matches[0]), false).unwrap();
        assert_eq!(line, "app.go:12 -> // FIXME: leak");
        let colored = render_event(&ScanEvent::Match(&r.matches[0]), true).unwrap();
        assert!(colored.contains("\u{1b}["));
        assert!(colored.starts_with("app.go:12 -> "));
    }

    #[test]
    fn test_summary_lists_all_categories_and_fixme_error() {
        let lines = compose_summary(&todo_report(), Scanner::Todos, false);
        assert!(lines.contains(&"Results:".to_string()));
        assert!(lines.contains(&"FIXME: 1".to_string()));
        assert!(lines.contains(&"TODO: 0".to_string()));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("Error: Found FIXME comments.")));
    }

    #[test]
    fn test_log_summary_has_banner_and_no_error() {
        let r: ScanReport<LogLevel> = ScanReport::default();
        let lines = compose_summary(&r, Scanner::Logs, false);
        for level in ["Debug: 0", "Error: 0", "Trace: 0", "Info: 0", "Warn: 0"] {
            assert!(lines.contains(&level.to_string()));
        }
        assert!(lines.contains(&"Please review the logs and keep them to a minimum.".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Error: Found")));
    }

    #[test]
    fn test_compose_scan_json_shape() {
        let out = compose_scan_json(&todo_report(), Scanner::Todos, Path::new("/repo"));
        assert_eq!(out["variant"], "todos");
        assert_eq!(out["files"], 2);
        assert_eq!(out["failed"], true);
        assert_eq!(out["summary"]["FIXME"], 1);
        assert_eq!(out["summary"]["TODO"], 0);
        assert_eq!(out["matches"][0]["file"], "builder/pkg/app.go");
        assert_eq!(out["matches"][0]["line"], 12);
        assert_eq!(out["matches"][0]["text"], "// FIXME: leak");
        assert_eq!(out["matches"][0]["category"], "FIXME");
        assert_eq!(out["errors"][0]["file"], "builder/gone.go");
    }

    #[test]
    fn test_uncolored_summary_has_no_escapes() {
        let lines = compose_summary(&todo_report(), Scanner::Todos, false);
        assert!(lines.contains(&"note: 1 file(s) could not be read".to_string()));
        assert!(lines.iter().all(|l| !l.contains('\u{1b}')));
    }

    #[test]
    fn test_json_disables_colors() {
        assert!(!use_colors("json", false));
        assert!(!use_colors("human", true));
    }
}
