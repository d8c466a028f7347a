// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::ConvertOptions;

/// Exit status for usage errors and unsupported input names, matching what
/// clap uses for argument errors.
pub const USAGE_EXIT_CODE: u8 = 2;

/// Convert an acquisition log into a CSV table (`<FILE>.csv`).
#[derive(Parser, Debug, Clone)]
#[command(name = "log-to-csv", version, about)]
pub struct ConvertArgs {
    /// Log file to convert
    #[arg(short = 'f', value_name = "FILE")]
    pub file: PathBuf,

    /// Skip blank lines instead of treating the first one as end of data
    #[arg(long, default_value_t = false)]
    pub read_past_blank: bool,
}

impl ConvertArgs {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            stop_at_blank: !self.read_past_blank,
            ..ConvertOptions::default()
        }
    }
}

/// Compute per-step means and standard errors from a converted CSV table.
#[derive(Parser, Debug, Clone)]
#[command(name = "analyse", version, about)]
pub struct AnalyseArgs {
    /// CSV table produced by log-to-csv
    #[arg(short = 'f', value_name = "FILE")]
    pub file: PathBuf,
}

/// Convert a Pt100 resistance reading into a temperature.
#[derive(Parser, Debug, Clone)]
#[command(name = "r-to-t", version, about)]
pub struct RtdArgs {
    /// Measured resistance in ohms
    #[arg(value_name = "OHMS", allow_negative_numbers = true)]
    pub resistance: f64,
}

/// Logs at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
