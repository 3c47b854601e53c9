use itertools::Itertools;

use crate::quantity::{Quantity, cost::Cost, rate::Rate, units::Units};

/// One tier of the progressive tariff.
#[derive(Copy, Clone, Debug)]
pub struct Slab {
    /// Cumulative consumption up to which the rate applies, open-ended for the last slab.
    pub up_to: Option<Units>,

    pub rate: Rate,
}

/// NESCO residential slabs. Changing the tariff means changing only this table.
pub const SLABS: [Slab; 2] = [
    Slab { up_to: Some(Quantity(75.0)), rate: Quantity(5.26) },
    Slab { up_to: None, rate: Quantity(7.20) },
];

/// Energy cost of the total consumption.
///
/// Each unit is charged at the rate of the slab it falls into (marginal rates).
#[must_use]
pub fn energy_cost(total: Units) -> Cost {
    let mut cost = Cost::ZERO;
    let mut lower = Units::ZERO;
    for slab in &SLABS {
        if total <= lower {
            break;
        }
        let upper = slab.up_to.map_or(total, |up_to| up_to.min(total));
        cost += (upper - lower) * slab.rate;
        lower = upper;
    }
    cost
}

/// Human-readable tariff line for reports.
#[must_use]
pub fn describe() -> String {
    let mut lower = Units::ZERO;
    let slabs = SLABS
        .iter()
        .map(|slab| {
            let description = match slab.up_to {
                Some(up_to) => format!("{}-{} units @ {}", lower.0, up_to.0, slab.rate),
                None => format!("{}+ units @ {}", lower.0, slab.rate),
            };
            lower = slab.up_to.unwrap_or(lower);
            description
        })
        .join(" | ");
    format!("NESCO Slab Rates: {slabs}")
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_zero_consumption() {
        assert_eq!(energy_cost(Units::ZERO).0, 0.0);
    }

    #[test]
    fn test_within_first_slab() {
        assert_abs_diff_eq!(energy_cost(Units::from(50.0)).0, 263.0, epsilon = 1e-9);
    }

    #[test]
    fn test_first_slab_boundary() {
        assert_abs_diff_eq!(energy_cost(Units::from(75.0)).0, 394.5, epsilon = 1e-9);
    }

    #[test]
    fn test_first_unit_of_second_slab() {
        assert_abs_diff_eq!(energy_cost(Units::from(76.0)).0, 401.7, epsilon = 1e-9);
    }

    #[test]
    fn test_deep_into_second_slab() {
        assert_abs_diff_eq!(energy_cost(Units::from(100.0)).0, 574.5, epsilon = 1e-9);
    }

    #[test]
    fn test_fractional_units() {
        assert_abs_diff_eq!(energy_cost(Units::from(75.5)).0, 394.5 + 3.6, epsilon = 1e-9);
    }

    #[test]
    fn test_matches_two_slab_formula() {
        for total in [0.0, 1.0, 74.0, 75.0, 76.0, 150.0, 1234.5] {
            let expected =
                if total <= 75.0 { total * 5.26 } else { 75.0 * 5.26 + (total - 75.0) * 7.20 };
            assert_eq!(energy_cost(Units::from(total)).0, expected, "total = {total}");
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(),
            "NESCO Slab Rates: 0-75 units @ Tk 5.26/unit | 75+ units @ Tk 7.20/unit",
        );
    }
}
