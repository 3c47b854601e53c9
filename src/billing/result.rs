use serde::{Deserialize, Serialize};

use crate::{
    billing::mode::BillingMode,
    quantity::{cost::Cost, rate::Rate, units::Units},
};

/// Outcome of a billing computation.
///
/// In single mode the sub-meter fields are zero and `half_demand` and `half_vat` hold the
/// full amounts, borne by the owner alone.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillResult {
    pub total_units: Units,
    pub sub_units: Units,
    pub own_units: Units,
    pub average_rate: Rate,
    pub total_energy_cost: Cost,
    pub own_energy_cost: Cost,
    pub sub_energy_cost: Cost,
    pub half_demand: Cost,
    pub half_vat: Cost,
    pub own_total_bill: Cost,
    pub sub_total_bill: Cost,
}

impl BillResult {
    /// Amount payable for the whole premises.
    pub fn total_bill(&self, mode: BillingMode) -> Cost {
        match mode {
            BillingMode::Single => self.own_total_bill,
            BillingMode::Dual => self.own_total_bill + self.sub_total_bill,
        }
    }

    /// Share of the demand charge and VAT carried by each party.
    pub fn fixed_cost(&self) -> Cost {
        self.half_demand + self.half_vat
    }
}
