//! Diagnostic logging to stderr via `flexi_logger`.
//!
//! Scan results go to stdout; everything emitted through the `log` macros
//! goes to stderr so CI output stays parseable.

use flexi_logger::{DeferredNow, FlexiLoggerError, Logger, LoggerHandle};
use log::Record;
use owo_colors::OwoColorize;
use std::io::Write;
use std::sync::{Mutex, OnceLock};

static LOGGER_HANDLE: OnceLock<Mutex<LoggerHandle>> = OnceLock::new();

/// Start the global logger.
///
/// `level` wins over `RUST_LOG`; without either the level is `warn`.
pub fn init_logging(level: Option<&str>, color: bool) -> Result<(), FlexiLoggerError> {
    let logger = match level {
        Some(spec) => Logger::try_with_str(spec)?,
        None => Logger::try_with_env_or_str("warn")?,
    };
    let logger = if color {
        logger.format(color_format)
    } else {
        logger.format(plain_format)
    };
    let handle = logger.log_to_stderr().start()?;
    let _ = LOGGER_HANDLE.set(Mutex::new(handle));
    Ok(())
}

fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

// "HH:MM:SS WRN message"
fn plain_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {}",
        now.format("%H:%M:%S"),
        level_abbr(record.level()),
        record.args()
    )
}

fn color_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let abbr = level_abbr(record.level());
    let level = match record.level() {
        log::Level::Error => abbr.red().bold().to_string(),
        log::Level::Warn => abbr.yellow().to_string(),
        log::Level::Info => abbr.green().to_string(),
        log::Level::Debug => abbr.blue().to_string(),
        log::Level::Trace => abbr.magenta().to_string(),
    };
    write!(
        w,
        "{} {} {}",
        now.format("%H:%M:%S").to_string().dimmed(),
        level,
        record.args()
    )
}
