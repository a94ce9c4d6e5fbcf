//! Target resolution: which files a scan should read.
//!
//! In CI the changed files arrive through `CHANGED_FILES` as a
//! whitespace-separated list. When that is absent or empty the resolver walks
//! a directory tree instead and keeps files with the configured extension.

use crate::error::{ScanError, ScanResult};
use glob::glob;
use std::env::{self, VarError};
use std::path::{Path, PathBuf};

pub const CHANGED_FILES_VAR: &str = "CHANGED_FILES";

/// Where the targets came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    ChangedFiles,
    Walk,
}

#[derive(Debug, Clone)]
pub struct Targets {
    pub source: TargetSource,
    pub paths: Vec<PathBuf>,
}

/// Inputs of the resolver after config precedence has been applied.
#[derive(Debug, Clone)]
pub struct TargetSettings {
    /// Joined in front of every changed-file entry.
    pub changed_prefix: PathBuf,
    /// Directory walked when no changed files are given.
    pub walk_root: PathBuf,
    /// File name suffix kept by the walk, e.g. `.go`.
    pub extension: String,
}

/// Read the raw changed-files list from the environment.
///
/// `Ok(None)` when unset; an error when set but not valid Unicode.
pub fn changed_files_from_env() -> ScanResult<Option<String>> {
    match env::var(CHANGED_FILES_VAR) {
        Ok(v) => Ok(Some(v)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e @ VarError::NotUnicode(_)) => Err(ScanError::TargetResolution {
            var: CHANGED_FILES_VAR.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Split a changed-files value and anchor each entry under `prefix`.
pub fn parse_changed_files(raw: &str, prefix: &Path) -> Vec<PathBuf> {
    raw.split_whitespace().map(|f| prefix.join(f)).collect()
}

/// Recursively collect files under `root` whose name ends with `extension`.
///
/// Results are sorted. A missing root yields an empty list.
pub fn walk_files(root: &Path, extension: &str) -> ScanResult<Vec<PathBuf>> {
    let pattern = format!(
        "{}/**/*{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        glob::Pattern::escape(extension)
    );
    let entries = glob(&pattern).map_err(|source| ScanError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(p) if p.is_file() => files.push(p),
            Ok(_) => {}
            Err(e) => log::warn!("skipping unreadable path during walk: {}", e),
        }
    }
    files.sort();
    Ok(files)
}

/// Resolve targets from the changed-files value, falling back to a walk.
///
/// A resolution error on the changed-files value is logged and treated as if
/// the variable were absent.
pub fn resolve_targets(
    changed: ScanResult<Option<String>>,
    settings: &TargetSettings,
) -> ScanResult<Targets> {
    let changed = match changed {
        Ok(v) => v,
        Err(e) => {
            log::warn!("{}; falling back to directory walk", e);
            None
        }
    };
    if let Some(raw) = changed.as_deref() {
        let paths = parse_changed_files(raw, &settings.changed_prefix);
        if !paths.is_empty() {
            log::debug!("{} target(s) from ${}", paths.len(), CHANGED_FILES_VAR);
            return Ok(Targets {
                source: TargetSource::ChangedFiles,
                paths,
            });
        }
    }
    log::debug!(
        "walking {} for *{}",
        settings.walk_root.display(),
        settings.extension
    );
    if !settings.walk_root.is_dir() {
        log::warn!(
            "walk root {} is not a directory; nothing to scan",
            settings.walk_root.display()
        );
    }
    let paths = walk_files(&settings.walk_root, &settings.extension)?;
    Ok(Targets {
        source: TargetSource::Walk,
        paths,
    })
}
