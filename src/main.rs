#![allow(clippy::doc_markdown)]

mod cli;

use clap::{Parser, crate_version};
use meterbill::{
    history::{FileStorage, HistoryStore},
    prelude::*,
};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    debug!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let mut store = HistoryStore::new(FileStorage::in_directory(&args.data_dir));

    match args.command {
        Command::Compute(args) => args.run(&mut store).await?,
        Command::History(args) => args.run(&mut store).await?,
    }

    Ok(())
}
