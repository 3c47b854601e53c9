//! Bill breakdown document handed to whatever renders or exports it.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    billing::{BillResult, BillingConfig, BillingMode, tariff},
    prelude::*,
    quantity::{cost::Cost, rate::Rate, units::Units},
};

#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct BillReport {
    pub header: Header,
    pub summary: Summary,
    pub breakdown: Breakdown,
    pub footnote: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Header {
    pub title: &'static str,
    pub generated_on: NaiveDate,
    pub mode: BillingMode,
    pub mode_label: &'static str,
}

/// Consumption summary of the whole premises.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Summary {
    pub total_units: Units,
    pub average_rate: Rate,
    pub total_bill: Cost,
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Breakdown {
    Single(SinglePayer),
    Dual { owner: Party, tenant: Party },
}

/// Sole payer, carrying the full demand charge and VAT.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct SinglePayer {
    pub units: Units,
    pub energy_cost: Cost,
    pub demand_charge: Cost,
    pub vat_rate_percent: f64,
    pub vat: Cost,
    pub total: Cost,
}

/// One side of a dual-meter split.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Party {
    pub units: Units,
    pub energy_cost: Cost,

    /// Half of the demand charge plus half of the VAT.
    pub fixed_cost: Cost,

    pub total: Cost,
}

impl BillReport {
    pub const TITLE: &'static str = "Electricity Bill Breakdown";

    pub fn new(
        mode: BillingMode,
        config: &BillingConfig,
        result: &BillResult,
        generated_on: NaiveDate,
    ) -> Self {
        let breakdown = match mode {
            BillingMode::Single => Breakdown::Single(SinglePayer {
                units: result.total_units,
                energy_cost: result.total_energy_cost,
                demand_charge: result.half_demand,
                vat_rate_percent: config.vat_rate_percent,
                vat: result.half_vat,
                total: result.own_total_bill,
            }),
            BillingMode::Dual => Breakdown::Dual {
                owner: Party {
                    units: result.own_units,
                    energy_cost: result.own_energy_cost,
                    fixed_cost: result.fixed_cost(),
                    total: result.own_total_bill,
                },
                tenant: Party {
                    units: result.sub_units,
                    energy_cost: result.sub_energy_cost,
                    fixed_cost: result.fixed_cost(),
                    total: result.sub_total_bill,
                },
            },
        };
        Self {
            header: Header {
                title: Self::TITLE,
                generated_on,
                mode,
                mode_label: mode.label(),
            },
            summary: Summary {
                total_units: result.total_units,
                average_rate: result.average_rate,
                total_bill: result.total_bill(mode),
            },
            breakdown,
            footnote: tariff::describe(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize the report")
    }
}
