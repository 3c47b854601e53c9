mod compute;
mod history;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use self::{compute::ComputeArgs, history::HistoryArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Directory the bill history file is kept in.
    #[clap(long = "data-dir", env = "DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute a bill from meter readings, optionally saving it to the history.
    #[clap(name = "compute")]
    Compute(Box<ComputeArgs>),

    /// Browse and manage saved bills.
    #[clap(name = "history")]
    History(HistoryArgs),
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum ExportFormat {
    /// Human-readable tables.
    #[default]
    Table,

    /// Structured breakdown document.
    Json,
}
