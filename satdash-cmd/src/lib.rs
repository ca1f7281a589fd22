//! Command implementations for the satdash CLI.
//!
//! Every command reads a `dashboard_data.json` snapshot (optionally gzipped)
//! and never writes to it.

use clap::Subcommand;
use satdash_data::TimeRange;
use std::path::PathBuf;

pub mod export;
pub mod summary;
pub mod validate;

#[derive(Subcommand)]
pub enum Command {
    /// Print the dashboard panels as text
    Summary {
        /// Snapshot file (.json or .json.gz)
        data: PathBuf,

        /// Window for the coverage section: all, 1y, 6m, 3m, 1m
        #[arg(short = 'r', long, default_value = "all")]
        range: TimeRange,
    },

    /// Check snapshot invariants; exits non-zero when any are violated
    Validate {
        /// Snapshot file (.json or .json.gz)
        data: PathBuf,
    },

    /// Write the timeseries (optionally windowed) as CSV
    Export {
        /// Snapshot file (.json or .json.gz)
        data: PathBuf,

        /// Output CSV path
        #[arg(short = 'o', long)]
        out: PathBuf,

        /// Window: all, 1y, 6m, 3m, 1m
        #[arg(short = 'r', long, default_value = "all")]
        range: TimeRange,

        /// Comma-separated columns to keep (default: every column)
        #[arg(short = 'c', long, value_delimiter = ',')]
        columns: Vec<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { data, range } => summary::run_summary(&data, range),
        Command::Validate { data } => validate::run_validate(&data),
        Command::Export {
            data,
            out,
            range,
            columns,
        } => export::run_export(&data, &out, range, &columns),
    }
}
