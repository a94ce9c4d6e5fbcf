//! Scan loop: read each target, match its lines, accumulate a report.
//!
//! Files are processed one at a time and fully read before matching. A target
//! that cannot be read is recorded in the report and the loop moves on.

use crate::error::{ScanError, ScanResult};
use crate::matcher::LineMatcher;
use crate::models::{FileError, MatchResult, ScanReport};
use std::fs;
use std::path::{Path, PathBuf};

/// Progress notifications emitted while scanning, in order.
#[derive(Debug)]
pub enum ScanEvent<'a, C> {
    Checking(&'a Path),
    Match(&'a MatchResult<C>),
    ReadFailed(&'a FileError),
}

/// Match every line of `path`.
///
/// Invalid UTF-8 bytes are replaced, so a stray byte never hides a match.
pub fn scan_file<M: LineMatcher>(
    path: &Path,
    matcher: &M,
) -> ScanResult<Vec<MatchResult<M::Category>>> {
    let bytes = fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data = String::from_utf8_lossy(&bytes);
    Ok(data
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            matcher.match_line(line).map(|category| MatchResult {
                path: path.to_path_buf(),
                line_number: i + 1,
                line: line.to_string(),
                category,
            })
        })
        .collect())
}

/// Scan `targets` in order, reporting progress through `on_event`.
pub fn scan_targets<M, F>(
    targets: &[PathBuf],
    matcher: &M,
    mut on_event: F,
) -> ScanReport<M::Category>
where
    M: LineMatcher,
    F: FnMut(ScanEvent<'_, M::Category>),
{
    let mut report = ScanReport::default();
    for path in targets {
        on_event(ScanEvent::Checking(path));
        match scan_file(path, matcher) {
            Ok(found) => {
                report.files_scanned += 1;
                for m in found {
                    on_event(ScanEvent::Match(&m));
                    report.record(m);
                }
            }
            Err(e) => {
                log::debug!("{}", e);
                let fe = FileError {
                    path: path.clone(),
                    message: e.to_string(),
                };
                on_event(ScanEvent::ReadFailed(&fe));
                report.errors.push(fe);
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{CommentMarkerMatcher, LogCallMatcher};
    use crate::models::{Category, LogLevel, Marker};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_file_line_numbers_are_one_based() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("a.go");
        fs::write(&p, "package a\n\n// TODO: first\nfunc f() {}\n//FIXME now\n").unwrap();
        let found = scan_file(&p, &CommentMarkerMatcher::new()).unwrap();
        let got: Vec<_> = found.iter().map(|m| (m.line_number, m.category)).collect();
        assert_eq!(got, vec![(3, Marker::Todo), (5, Marker::Fixme)]);
        assert_eq!(found[0].line, "// TODO: first");
    }

    #[test]
    fn test_invalid_utf8_does_not_hide_markers() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("latin1.go");
        fs::write(&p, b"// caf\xe9 comment\n// FIXME: data race\n").unwrap();
        let found = scan_file(&p, &CommentMarkerMatcher::new()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line_number, 2);
        assert_eq!(found[0].category, Marker::Fixme);

        let report = scan_targets(&[p], &CommentMarkerMatcher::new(), |_| {});
        assert!(report.errors.is_empty());
        assert!(report.failed());
    }

    #[test]
    fn test_tally_sum_equals_matched_lines() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.go");
        let b = dir.path().join("b.go");
        let c = dir.path().join("c.go");
        fs::write(&a, "log.Error()\nlog.Error(\"boom\")\nlog.Info()\r\n").unwrap();
        fs::write(&b, "func main() {}\n").unwrap();
        fs::write(&c, "  log.Warn()\nlog.Warn()\nlog.Debug() ; log.Trace()\n").unwrap();

        let report = scan_targets(&[a, b, c], &LogCallMatcher::new(), |_| {});
        assert_eq!(report.files_scanned, 3);
        assert_eq!(report.tally.total(), 5);
        assert_eq!(report.matches.len(), 5);
        assert_eq!(report.tally.get(LogLevel::Error), 1);
        assert_eq!(report.tally.get(LogLevel::Warn), 2);
        assert_eq!(report.tally.get(LogLevel::Trace), 0);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_missing_file_does_not_abort_batch() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone.go");
        let present = dir.path().join("here.go");
        fs::write(&present, "// FIXME broken\n").unwrap();

        let mut events = Vec::new();
        let report = scan_targets(
            &[missing.clone(), present.clone()],
            &CommentMarkerMatcher::new(),
            |e| {
                events.push(match e {
                    ScanEvent::Checking(p) => format!("check {}", p.display()),
                    ScanEvent::Match(m) => format!("match {}", m.category.label()),
                    ScanEvent::ReadFailed(fe) => format!("fail {}", fe.path.display()),
                })
            },
        );
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, missing);
        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.tally.get(Marker::Fixme), 1);
        assert_eq!(
            events,
            vec![
                format!("check {}", missing.display()),
                format!("fail {}", missing.display()),
                format!("check {}", present.display()),
                "match FIXME".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_target_list_gives_zero_tally() {
        let report = scan_targets(&[], &CommentMarkerMatcher::new(), |_| {});
        assert_eq!(report.files_scanned, 0);
        assert!(report.tally.iter().all(|(_, n)| n == 0));
        assert!(!report.failed());
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("a.go");
        fs::write(&p, "// TODO one\n// todo two\n// FIXME three\n").unwrap();
        let targets = vec![p];
        let m = CommentMarkerMatcher::new();
        let first = scan_targets(&targets, &m, |_| {});
        let second = scan_targets(&targets, &m, |_| {});
        assert_eq!(first.tally, second.tally);
        assert_eq!(first.matches, second.matches);
    }
}
