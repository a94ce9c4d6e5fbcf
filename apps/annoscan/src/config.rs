//! Configuration discovery and effective settings resolution.
//!
//! annoscan reads `annoscan.toml|yaml|yml` from the base directory (or the
//! closest ancestor, stopping at a `.git` directory) and merges it with CLI
//! flags to produce an `Effective` config.
//! Defaults:
//! - `root`: `../builder`
//! - `ext`: `.go`
//! - `changed_prefix`: `..`
//! - `output`: `human`
//!
//! Relative paths resolve against the base directory (`--repo-root` or the
//! current directory). Overrides precedence: CLI > config file > defaults.

use crate::error::{ScanError, ScanResult};
use crate::targets::TargetSettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WALK_ROOT: &str = "../builder";
pub const DEFAULT_EXTENSION: &str = ".go";
pub const DEFAULT_CHANGED_PREFIX: &str = "..";

/// Accepted values for `output`.
pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

const CONFIG_NAMES: [&str; 3] = ["annoscan.toml", "annoscan.yaml", "annoscan.yml"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
/// Root configuration loaded from `annoscan.toml|yaml`.
pub struct AnnoscanConfig {
    /// Directory walked when `CHANGED_FILES` is absent.
    pub root: Option<String>,
    /// File suffix kept by the walk.
    pub ext: Option<String>,
    /// Prefix joined onto every `CHANGED_FILES` entry.
    pub changed_prefix: Option<String>,
    pub output: Option<String>,
}

/// CLI-level overrides; `None` defers to the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides<'a> {
    pub repo_root: Option<&'a str>,
    pub root: Option<&'a str>,
    pub ext: Option<&'a str>,
    pub changed_prefix: Option<&'a str>,
    pub output: Option<&'a str>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub base: PathBuf,
    pub config_path: Option<PathBuf>,
    pub walk_root: PathBuf,
    pub extension: String,
    pub changed_prefix: PathBuf,
    pub output: String,
}

impl Effective {
    pub fn target_settings(&self) -> TargetSettings {
        TargetSettings {
            changed_prefix: self.changed_prefix.clone(),
            walk_root: self.walk_root.clone(),
            extension: self.extension.clone(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.output == "json"
    }
}

/// Walk upward from `start` looking for a config file.
///
/// Stops at the first directory holding a config file or a `.git` directory.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        for name in CONFIG_NAMES {
            let p = cur.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Parse a config file; the format follows the extension.
pub fn load_config(path: &Path) -> ScanResult<AnnoscanConfig> {
    let s = fs::read_to_string(path).map_err(|e| ScanError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let is_toml = path.extension().map(|e| e == "toml").unwrap_or(false);
    let parsed = if is_toml {
        toml::from_str::<AnnoscanConfig>(&s).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<AnnoscanConfig>(&s).map_err(|e| e.to_string())
    };
    let cfg = parsed.map_err(|message| ScanError::Config {
        path: path.to_path_buf(),
        message,
    })?;
    if let Some(out) = cfg.output.as_deref() {
        if !OUTPUT_MODES.contains(&out) {
            return Err(ScanError::Config {
                path: path.to_path_buf(),
                message: format!(
                    "unknown output '{}' (expected {})",
                    out,
                    OUTPUT_MODES.join("|")
                ),
            });
        }
    }
    Ok(cfg)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides<'_>) -> ScanResult<Effective> {
    let base = PathBuf::from(cli.repo_root.unwrap_or("."));
    let config_path = find_config(&absolute(&base));
    let cfg = match config_path.as_deref() {
        Some(p) => load_config(p)?,
        None => AnnoscanConfig::default(),
    };

    let walk_root = cli
        .root
        .map(str::to_string)
        .or(cfg.root)
        .unwrap_or_else(|| DEFAULT_WALK_ROOT.to_string());
    let extension = cli
        .ext
        .map(str::to_string)
        .or(cfg.ext)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    let changed_prefix = cli
        .changed_prefix
        .map(str::to_string)
        .or(cfg.changed_prefix)
        .unwrap_or_else(|| DEFAULT_CHANGED_PREFIX.to_string());
    let output = cli
        .output
        .map(str::to_string)
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Ok(Effective {
        walk_root: base.join(walk_root),
        changed_prefix: base.join(changed_prefix),
        extension,
        output,
        config_path,
        base,
    })
}

// Ancestor lookup needs an absolute start; `.` has no parent.
fn absolute(p: &Path) -> PathBuf {
    if p.is_absolute() {
        return p.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(p))
        .unwrap_or_else(|_| p.to_path_buf())
}
