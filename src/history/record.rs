use chrono::{DateTime, Utc};
use derive_more::{Display, From, FromStr};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    billing::{BillInputs, BillResult, BillingConfig, BillingMode, MeterReading},
    quantity::{cost::Cost, rate::Rate, units::Units},
};

/// Opaque record identifier.
///
/// New records get a random UUID, but any string found in the storage is accepted as it is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, FromStr)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Persisted snapshot of a computed bill and the inputs it was computed from.
///
/// Records are never updated: saving the same bill again produces a new record.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillHistoryRecord {
    pub id: RecordId,
    pub mode: BillingMode,
    pub main_prev_reading: Units,
    pub main_curr_reading: Units,
    pub sub_prev_reading: Units,
    pub sub_curr_reading: Units,
    pub total_units: Units,
    pub sub_units: Units,
    pub own_units: Units,
    pub average_rate: Rate,
    pub demand_charge: Cost,
    pub vat_rate: f64,
    pub owner_bill: Cost,
    pub tenant_bill: Cost,
    pub total_bill: Cost,
    pub created_at: DateTime<Utc>,
}

impl BillHistoryRecord {
    pub fn new(
        id: RecordId,
        created_at: DateTime<Utc>,
        inputs: &BillInputs,
        result: &BillResult,
    ) -> Self {
        let sub = inputs.sub.unwrap_or_default();
        Self {
            id,
            mode: inputs.mode,
            main_prev_reading: inputs.main.previous,
            main_curr_reading: inputs.main.current,
            sub_prev_reading: sub.previous,
            sub_curr_reading: sub.current,
            total_units: result.total_units,
            sub_units: result.sub_units,
            own_units: result.own_units,
            average_rate: result.average_rate,
            demand_charge: inputs.config.demand_charge,
            vat_rate: inputs.config.vat_rate_percent,
            owner_bill: result.own_total_bill,
            tenant_bill: result.sub_total_bill,
            total_bill: result.total_bill(inputs.mode),
            created_at,
        }
    }

    /// Inputs the bill was computed from, for refilling a form.
    ///
    /// The sub-meter readings are returned in either mode, as they were entered.
    pub fn inputs(&self) -> BillInputs {
        BillInputs::builder()
            .mode(self.mode)
            .main(MeterReading {
                previous: self.main_prev_reading,
                current: self.main_curr_reading,
            })
            .sub(MeterReading { previous: self.sub_prev_reading, current: self.sub_curr_reading })
            .config(self.config())
            .build()
    }

    const fn config(&self) -> BillingConfig {
        BillingConfig { demand_charge: self.demand_charge, vat_rate_percent: self.vat_rate }
    }

    /// Rebuild the full result from the stored fields, without re-validating the readings.
    ///
    /// Energy costs are re-derived from the stored average rate, fixed costs follow the same
    /// halving rule as the engine. The stored totals are taken as they are.
    pub fn reconstruct(&self) -> BillResult {
        let total_energy_cost = self.total_units * self.average_rate;
        let vat = self.config().vat_on(total_energy_cost + self.demand_charge);
        let (half_demand, half_vat) = match self.mode {
            BillingMode::Single => (self.demand_charge, vat),
            BillingMode::Dual => (self.demand_charge / 2.0, vat / 2.0),
        };
        BillResult {
            total_units: self.total_units,
            sub_units: self.sub_units,
            own_units: self.own_units,
            average_rate: self.average_rate,
            total_energy_cost,
            own_energy_cost: self.own_units * self.average_rate,
            sub_energy_cost: self.sub_units * self.average_rate,
            half_demand,
            half_vat,
            own_total_bill: self.owner_bill,
            sub_total_bill: self.tenant_bill,
        }
    }
}
