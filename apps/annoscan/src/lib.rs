//! annoscan core library.
//!
//! Scans source files for annotations and tallies them per category. Two
//! scanners share the pipeline: empty-argument log calls (`logs`) and
//! TODO/FIXME line comments (`todos`, which fails on FIXME).
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `targets`: Changed-file list or directory walk.
//! - `matcher`: Per-line category matching.
//! - `scan`: Scan loop producing a `ScanReport`.
//! - `models`: Categories, tallies and report structs.
//! - `output`: Human/JSON printers.
//! - `error`: Shared error type.
//! - `logging`: stderr diagnostics.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod output;
pub mod scan;
pub mod targets;
pub mod utils;
