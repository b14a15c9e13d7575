//! CLI argument definitions for the preferences tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "folio-prefs",
    version,
    about = "Inspect and maintain Folio preferences files",
    long_about = "Inspect and maintain the Folio viewer's preferences file.\n\n\
                  The file stores global settings and the per-document history\n\
                  (last page, zoom, rotation, window placement)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the stored settings and document history.
    Show(ShowArgs),

    /// Rewrite the preferences file, optionally switching to globals-only mode.
    Compact(CompactArgs),

    /// Print the default preferences file location.
    Path,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Preferences file (default: the platform configuration folder).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Print the whole state as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CompactArgs {
    /// Preferences file (default: the platform configuration folder).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Switch to globals-only mode before saving.
    ///
    /// Only the most recent documents are kept and their per-document view
    /// state is dropped.
    #[arg(long = "globals-only")]
    pub globals_only: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
