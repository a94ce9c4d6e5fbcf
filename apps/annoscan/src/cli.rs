//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "annoscan",
    version,
    about = "Scan changed source files for log calls and TODO/FIXME comments",
    long_about = "annoscan — a CI helper that scans source files for annotations.\n\nTargets come from $CHANGED_FILES (whitespace-separated, relative to --changed-prefix); when unset or empty, --root is walked for files ending in --ext.\n\nConfiguration precedence: CLI > annoscan.toml > defaults.",
    after_help = "Examples:\n  CHANGED_FILES=\"builder/app.go builder/db.go\" annoscan todos\n  annoscan logs --root ./builder --ext .go\n  annoscan todos --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported scanners.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current annoscan version.")]
    Version,
    /// Count empty-argument log calls by severity
    #[command(
        about = "Count empty log calls",
        long_about = "Report lines containing log.Debug(), log.Error(), log.Trace(), log.Info() or log.Warn() with no arguments. Never fails the build.",
        after_help = "Examples:\n  annoscan logs\n  annoscan logs --root ../builder --output json"
    )]
    Logs(ScanArgs),
    /// Count TODO/FIXME line comments; fail on FIXME
    #[command(
        about = "Count TODO/FIXME comments",
        long_about = "Report `//` line comments mentioning TODO or FIXME (case-insensitive). Exits 1 when any FIXME is found.",
        after_help = "Examples:\n  annoscan todos\n  CHANGED_FILES=\"pkg/a.go\" annoscan todos --changed-prefix ."
    )]
    Todos(ScanArgs),
}

#[derive(Args, Debug, Clone, Default)]
/// Options shared by both scanners.
pub struct ScanArgs {
    #[arg(long, help = "Base directory for relative paths (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Directory walked when $CHANGED_FILES is unset (default: ../builder)")]
    pub root: Option<String>,
    #[arg(long, help = "File suffix kept by the walk (default: .go)")]
    pub ext: Option<String>,
    #[arg(long, help = "Prefix joined onto each $CHANGED_FILES entry (default: ..)")]
    pub changed_prefix: Option<String>,
    #[arg(
        long,
        value_parser = crate::config::OUTPUT_MODES,
        help = "Output mode: human|json (default: human)"
    )]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable ANSI colors")]
    pub no_color: bool,
    #[arg(long, help = "Diagnostic log level, e.g. debug (default: $RUST_LOG or warn)")]
    pub log_level: Option<String>,
}

impl ScanArgs {
    pub fn overrides(&self) -> crate::config::Overrides<'_> {
        crate::config::Overrides {
            repo_root: self.repo_root.as_deref(),
            root: self.root.as_deref(),
            ext: self.ext.as_deref(),
            changed_prefix: self.changed_prefix.as_deref(),
            output: self.output.as_deref(),
        }
    }
}
