pub mod cost;
pub mod rate;
pub mod units;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Dimensional quantity over consumed energy units and currency.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[serde(transparent)]
pub struct Quantity<const UNITS: isize, const COST: isize>(pub f64);

impl<const UNITS: isize, const COST: isize> Quantity<UNITS, COST> {
    pub const ZERO: Self = Self(0.0);

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn min(self, rhs: Self) -> Self {
        if rhs.0 < self.0 { rhs } else { self }
    }
}

impl<const UNITS: isize, const COST: isize> Mul<f64> for Quantity<UNITS, COST> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const UNITS: isize, const COST: isize> Div<f64> for Quantity<UNITS, COST> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Bare = Quantity<0, 0>;

    #[test]
    fn test_min() {
        assert_eq!(Bare::from(1.0).min(Bare::from(2.0)).0, 1.0);
        assert_eq!(Bare::from(2.0).min(Bare::from(1.0)).0, 1.0);
    }

    #[test]
    fn test_scalar_ops() {
        assert_eq!((Bare::from(3.0) * 2.0).0, 6.0);
        assert_eq!((Bare::from(3.0) / 2.0).0, 1.5);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Bare::from(42.5)).unwrap(), "42.5");
        assert_eq!(serde_json::from_str::<Bare>("7").unwrap().0, 7.0);
    }
}
