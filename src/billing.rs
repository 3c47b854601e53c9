//! Slab-tariff billing engine.
//!
//! Everything here is pure: readings and configuration go in, a [`BillResult`] or a
//! [`ValidationError`] comes out.

pub mod config;
pub mod error;
pub mod input;
pub mod mode;
pub mod reading;
pub mod result;
pub mod tariff;

pub use self::{
    config::BillingConfig,
    error::ValidationError,
    input::{BillInputs, RawInputs},
    mode::BillingMode,
    reading::{Meter, MeterReading},
    result::BillResult,
};
use crate::quantity::{cost::Cost, rate::Rate, units::Units};

/// Compute the bill for the period.
///
/// Validation stops at the first failure: main reading, sub reading, sub-meter share,
/// then the fixed charges. In dual mode a missing sub reading counts as no tenant consumption.
///
/// Energy is split between the owner and the tenant at the blended average rate, not per slab.
/// Demand charge and VAT are split exactly in half in dual mode.
pub fn compute_bill(
    mode: BillingMode,
    main: MeterReading,
    sub: Option<MeterReading>,
    config: BillingConfig,
) -> Result<BillResult, ValidationError> {
    let total_units = main.consumption(Meter::Main)?;
    let sub_units = match mode {
        BillingMode::Single => Units::ZERO,
        BillingMode::Dual => {
            let sub_units = sub.unwrap_or_default().consumption(Meter::Sub)?;
            if sub_units > total_units {
                return Err(ValidationError::SubExceedsMain);
            }
            sub_units
        }
    };
    config.validate()?;
    // `own_units + sub_units` matches `total_units` only up to float rounding.
    let own_units = total_units - sub_units;

    let total_energy_cost = tariff::energy_cost(total_units);
    let average_rate =
        if total_units > Units::ZERO { total_energy_cost / total_units } else { Rate::ZERO };
    let sub_energy_cost = sub_units * average_rate;
    let own_energy_cost = own_units * average_rate;
    let vat = config.vat_on(total_energy_cost + config.demand_charge);

    let (half_demand, half_vat, own_total_bill, sub_total_bill) = match mode {
        BillingMode::Single => (
            config.demand_charge,
            vat,
            total_energy_cost + config.demand_charge + vat,
            Cost::ZERO,
        ),
        BillingMode::Dual => {
            let half_demand = config.demand_charge / 2.0;
            let half_vat = vat / 2.0;
            (
                half_demand,
                half_vat,
                own_energy_cost + half_demand + half_vat,
                sub_energy_cost + half_demand + half_vat,
            )
        }
    };

    Ok(BillResult {
        total_units,
        sub_units,
        own_units,
        average_rate,
        total_energy_cost,
        own_energy_cost,
        sub_energy_cost,
        half_demand,
        half_vat,
        own_total_bill,
        sub_total_bill,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn dual(main: (f64, f64), sub: (f64, f64)) -> Result<BillResult, ValidationError> {
        compute_bill(
            BillingMode::Dual,
            MeterReading::new(main.0, main.1),
            Some(MeterReading::new(sub.0, sub.1)),
            BillingConfig::new(42.0, 5.0),
        )
    }

    fn single(previous: f64, current: f64) -> Result<BillResult, ValidationError> {
        compute_bill(
            BillingMode::Single,
            MeterReading::new(previous, current),
            None,
            BillingConfig::new(42.0, 5.0),
        )
    }

    #[test]
    fn test_dual_worked_example() {
        let result = dual((0.0, 100.0), (0.0, 30.0)).unwrap();
        assert_eq!(result.total_units.0, 100.0);
        assert_eq!(result.sub_units.0, 30.0);
        assert_eq!(result.own_units.0, 70.0);
        assert_abs_diff_eq!(result.total_energy_cost.0, 574.5, epsilon = 1e-9);
        assert_abs_diff_eq!(result.average_rate.0, 5.745, epsilon = 1e-9);
        assert_abs_diff_eq!(result.sub_energy_cost.0, 172.35, epsilon = 1e-9);
        assert_abs_diff_eq!(result.own_energy_cost.0, 402.15, epsilon = 1e-9);
        assert_abs_diff_eq!(result.half_demand.0, 21.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.half_vat.0, 15.4125, epsilon = 1e-9);
        assert_abs_diff_eq!(result.own_total_bill.0, 438.5625, epsilon = 1e-9);
        assert_abs_diff_eq!(result.sub_total_bill.0, 208.7625, epsilon = 1e-9);
        assert_abs_diff_eq!(result.total_bill(BillingMode::Dual).0, 647.325, epsilon = 1e-9);
    }

    #[test]
    fn test_single_does_not_halve_fixed_costs() {
        let result = single(1000.0, 1100.0).unwrap();
        let vat = (574.5 + 42.0) * 5.0 / 100.0;
        assert_eq!(result.half_demand.0, 42.0);
        assert_abs_diff_eq!(result.half_vat.0, vat, epsilon = 1e-9);
        assert_eq!(result.sub_units.0, 0.0);
        assert_eq!(result.sub_energy_cost.0, 0.0);
        assert_eq!(result.sub_total_bill.0, 0.0);
        assert_eq!(result.own_units, result.total_units);
        assert_abs_diff_eq!(result.own_total_bill.0, 574.5 + 42.0 + vat, epsilon = 1e-9);
        assert_eq!(result.total_bill(BillingMode::Single), result.own_total_bill);
    }

    #[test]
    fn test_slab_boundary() {
        assert_abs_diff_eq!(single(0.0, 75.0).unwrap().total_energy_cost.0, 394.5, epsilon = 1e-9);
        assert_abs_diff_eq!(single(0.0, 76.0).unwrap().total_energy_cost.0, 401.7, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_consumption() {
        let result = dual((500.0, 500.0), (20.0, 20.0)).unwrap();
        assert_eq!(result.average_rate.0, 0.0);
        assert_eq!(result.total_energy_cost.0, 0.0);
        assert_abs_diff_eq!(result.own_total_bill.0, 21.0 + 1.05, epsilon = 1e-9);
        assert_abs_diff_eq!(result.sub_total_bill.0, 21.0 + 1.05, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_main_reading() {
        assert_eq!(single(10.0, 9.0), Err(ValidationError::InvalidReading(Meter::Main)));
    }

    #[test]
    fn test_invalid_main_reading_wins_over_sub() {
        assert_eq!(
            dual((10.0, 9.0), (5.0, 1.0)),
            Err(ValidationError::InvalidReading(Meter::Main)),
        );
    }

    #[test]
    fn test_invalid_sub_reading() {
        assert_eq!(
            dual((0.0, 100.0), (5.0, 1.0)),
            Err(ValidationError::InvalidReading(Meter::Sub)),
        );
    }

    #[test]
    fn test_sub_exceeds_main() {
        assert_eq!(dual((0.0, 10.0), (0.0, 11.0)), Err(ValidationError::SubExceedsMain));
    }

    #[test]
    fn test_sub_equal_to_main() {
        let result = dual((0.0, 10.0), (100.0, 110.0)).unwrap();
        assert_eq!(result.own_units.0, 0.0);
        assert_eq!(result.own_energy_cost.0, 0.0);
    }

    #[test]
    fn test_single_ignores_backwards_sub_meter() {
        let result = compute_bill(
            BillingMode::Single,
            MeterReading::new(0.0, 10.0),
            Some(MeterReading::new(50.0, 0.0)),
            BillingConfig::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_dual_without_sub_reading() {
        let result = compute_bill(
            BillingMode::Dual,
            MeterReading::new(0.0, 10.0),
            None,
            BillingConfig::default(),
        )
        .unwrap();
        assert_eq!(result.sub_units.0, 0.0);
        assert_eq!(result.half_demand.0, 21.0);
    }

    #[test]
    fn test_invalid_config() {
        let result = compute_bill(
            BillingMode::Single,
            MeterReading::new(0.0, 10.0),
            None,
            BillingConfig::new(42.0, -1.0),
        );
        assert_eq!(result, Err(ValidationError::InvalidConfig));
    }

    #[test]
    fn test_reading_errors_win_over_config() {
        let result = compute_bill(
            BillingMode::Single,
            MeterReading::new(10.0, 0.0),
            None,
            BillingConfig::new(-42.0, 5.0),
        );
        assert_eq!(result, Err(ValidationError::InvalidReading(Meter::Main)));
    }

    #[test]
    fn test_split_is_consistent() {
        for (main, sub) in [(0.0, 0.0), (2.9, 0.7), (75.0, 74.9), (76.0, 1.0), (333.3, 111.1)] {
            let result = dual((0.0, main), (0.0, sub)).unwrap();
            assert_eq!(result.own_units, result.total_units - result.sub_units);
            assert_abs_diff_eq!(
                (result.own_units + result.sub_units).0,
                result.total_units.0,
                epsilon = 1e-9,
            );
            assert_abs_diff_eq!(
                (result.own_energy_cost + result.sub_energy_cost).0,
                result.total_energy_cost.0,
                epsilon = 1e-9,
            );
        }
    }

    #[test]
    fn test_via_inputs_snapshot() {
        let inputs = BillInputs::builder()
            .mode(BillingMode::Dual)
            .main(MeterReading::new(0.0, 100.0))
            .sub(MeterReading::new(0.0, 30.0))
            .build();
        assert_eq!(inputs.compute(), dual((0.0, 100.0), (0.0, 30.0)));
    }
}
