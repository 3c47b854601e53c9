use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::quantity::{Quantity, rate::Rate, units::Units};

/// Amount of money in taka.
pub type Cost = Quantity<0, 1>;

impl Cost {
    /// Round to whole taka, the way bill totals are presented.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(self.0.round())
    }

    pub fn to_rounded_string(self) -> String {
        format!("Tk {}", self.rounded().0)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tk {:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}Tk", self.0)
    }
}

impl Div<Units> for Cost {
    type Output = Rate;

    fn div(self, rhs: Units) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Cost::from(172.345_678).to_string(), "Tk 172.35");
    }

    #[test]
    fn test_rounded_string() {
        assert_eq!(Cost::from(438.5625).to_rounded_string(), "Tk 439");
        assert_eq!(Cost::from(208.4).to_rounded_string(), "Tk 208");
    }

    #[test]
    fn test_cost_per_unit() {
        assert_eq!((Cost::from(574.5) / Units::from(100.0)).0, 5.745);
    }
}
