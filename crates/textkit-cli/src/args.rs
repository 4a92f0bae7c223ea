//! Shared CLI flags for the three binaries.
//!
//! Each binary keeps the original single-positional surface
//! (`<program> <FILENAME>`); the flags here only control logging and
//! color and are common to all three.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use crate::logging::{LogConfig, LogFormat};

#[derive(Args)]
pub struct GlobalArgs {
    /// Adjust log verbosity (-v for debug, -vv for trace, -q to silence
    /// skip diagnostics).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl GlobalArgs {
    /// Build the logging configuration with consistent precedence:
    /// verbosity flags beat `RUST_LOG`, which beats the default.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            use_env_filter: !self.verbosity.is_present(),
            format: match self.log_format {
                LogFormatArg::Pretty => LogFormat::Pretty,
                LogFormatArg::Compact => LogFormat::Compact,
                LogFormatArg::Json => LogFormat::Json,
            },
            log_file: self.log_file.clone(),
            with_ansi: match self.color.color {
                ColorChoice::Always => true,
                ColorChoice::Never => false,
                ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
            },
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
