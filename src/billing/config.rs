use serde::{Deserialize, Serialize};

use crate::{
    billing::error::ValidationError,
    quantity::{Quantity, cost::Cost},
};

/// Fixed charges, applied once per billing period regardless of consumption.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillingConfig {
    pub demand_charge: Cost,
    pub vat_rate_percent: f64,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self::new(42.0, 5.0)
    }
}

impl BillingConfig {
    pub const fn new(demand_charge: f64, vat_rate_percent: f64) -> Self {
        Self { demand_charge: Quantity(demand_charge), vat_rate_percent }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let is_valid = self.demand_charge.is_finite()
            && self.demand_charge >= Cost::ZERO
            && self.vat_rate_percent.is_finite()
            && self.vat_rate_percent >= 0.0;
        if is_valid { Ok(()) } else { Err(ValidationError::InvalidConfig) }
    }

    /// VAT on the taxable amount.
    #[must_use]
    pub fn vat_on(&self, taxable: Cost) -> Cost {
        taxable * self.vat_rate_percent / 100.0
    }
}
