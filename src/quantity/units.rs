use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, rate::Rate};

/// Consumed energy, in meter units (kilowatt-hours).
pub type Units = Quantity<1, 0>;

impl Display for Units {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} units", self.0)
    }
}

impl Debug for Units {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}u", self.0)
    }
}

impl Mul<Rate> for Units {
    type Output = Cost;

    fn mul(self, rhs: Rate) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_units_times_rate() {
        assert_abs_diff_eq!((Units::from(30.0) * Rate::from(5.745)).0, 172.35, epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Units::from(100.0).to_string(), "100 units");
        assert_eq!(Units::from(12.5).to_string(), "12.5 units");
    }
}
