use clap::{Parser, Subcommand};

use crate::cli::{ExportFormat, compute::print_bill};
use meterbill::{
    history::{HistoryStorage, HistoryStore, RecordId},
    prelude::*,
    tables::build_history_table,
};

#[derive(Parser)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List saved bills, newest first.
    List,

    /// Show a saved bill as it was computed.
    Show {
        id: RecordId,

        #[clap(long, value_enum, default_value_t)]
        export: ExportFormat,
    },

    /// Delete a saved bill.
    Delete { id: RecordId },

    /// Delete all saved bills.
    Clear,
}

impl HistoryArgs {
    pub async fn run<S: HistoryStorage>(&self, store: &mut HistoryStore<S>) -> Result {
        match &self.command {
            HistoryCommand::List => {
                let records = store.load().await.context("failed to load the history")?;
                info!(n_records = records.len(), "gotcha");
                println!("{}", build_history_table(records));
            }
            HistoryCommand::Show { id, export } => {
                store.load().await.context("failed to load the history")?;
                let record = store.find(id).with_context(|| format!("no saved bill `{id}`"))?;
                print_bill(&record.inputs(), &record.reconstruct(), *export)?;
            }
            HistoryCommand::Delete { id } => {
                store.delete(id).await.context("failed to delete the bill")?;
                info!(%id, "deleted");
            }
            HistoryCommand::Clear => {
                store.clear().await.context("failed to clear the history")?;
                info!("all history has been cleared");
            }
        }
        Ok(())
    }
}
