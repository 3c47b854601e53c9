use serde::{Deserialize, Serialize};

use crate::{
    billing::error::ValidationError,
    quantity::{Quantity, units::Units},
};

/// Which of the two meters a reading belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Meter {
    #[display("main")]
    Main,

    #[display("sub")]
    Sub,
}

/// Register values at the start and at the end of the billing period.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeterReading {
    pub previous: Units,
    pub current: Units,
}

impl MeterReading {
    pub const fn new(previous: f64, current: f64) -> Self {
        Self { previous: Quantity(previous), current: Quantity(current) }
    }

    /// Units consumed over the period.
    ///
    /// A register that went backwards is an input error, it is never clamped to zero.
    pub fn consumption(self, meter: Meter) -> Result<Units, ValidationError> {
        if self.previous.is_finite() && self.current.is_finite() && self.current >= self.previous {
            Ok(self.current - self.previous)
        } else {
            Err(ValidationError::InvalidReading(meter))
        }
    }
}
