use chrono::Local;
use clap::Parser;

use crate::cli::ExportFormat;
use meterbill::{
    billing::{BillInputs, BillResult, BillingMode, RawInputs},
    history::{HistoryStorage, HistoryStore},
    prelude::*,
    report::BillReport,
    tables::build_report_table,
};

#[derive(Parser)]
pub struct ComputeArgs {
    #[clap(long, value_enum, default_value_t, env = "BILLING_MODE")]
    pub mode: BillingMode,

    /// Previous reading of the main meter. Anything non-numeric counts as zero.
    #[clap(long, default_value = "")]
    pub main_previous: String,

    /// Current reading of the main meter.
    #[clap(long, default_value = "")]
    pub main_current: String,

    /// Previous reading of the tenant's sub-meter, dual mode only.
    #[clap(long, default_value = "")]
    pub sub_previous: String,

    /// Current reading of the tenant's sub-meter, dual mode only.
    #[clap(long, default_value = "")]
    pub sub_current: String,

    /// Fixed demand charge per billing period, in taka.
    #[clap(long, default_value = "42", env = "DEMAND_CHARGE")]
    pub demand_charge: String,

    /// VAT on energy cost plus demand charge, in percent.
    #[clap(long = "vat-rate", default_value = "5", env = "VAT_RATE_PERCENT")]
    pub vat_rate: String,

    /// Save the computed bill to the history.
    #[clap(long)]
    pub save: bool,

    #[clap(long, value_enum, default_value_t)]
    pub export: ExportFormat,
}

impl ComputeArgs {
    fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            main_previous: self.main_previous.clone(),
            main_current: self.main_current.clone(),
            sub_previous: self.sub_previous.clone(),
            sub_current: self.sub_current.clone(),
            demand_charge: self.demand_charge.clone(),
            vat_rate: self.vat_rate.clone(),
        }
    }

    #[instrument(skip_all, fields(mode = %self.mode))]
    pub async fn run<S: HistoryStorage>(&self, store: &mut HistoryStore<S>) -> Result {
        let inputs = self.raw_inputs().parse(self.mode);
        let result = inputs.compute().context("invalid reading")?;
        info!(total_units = %result.total_units, "calculation complete");
        print_bill(&inputs, &result, self.export)?;

        if self.save {
            let record = store.save(&inputs, &result).await.context("save failed")?;
            info!(id = %record.id, "bill saved locally");
        }
        Ok(())
    }
}

pub fn print_bill(inputs: &BillInputs, result: &BillResult, format: ExportFormat) -> Result {
    let report = BillReport::new(inputs.mode, &inputs.config, result, Local::now().date_naive());
    match format {
        ExportFormat::Table => println!("{}", build_report_table(&report)),
        ExportFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
