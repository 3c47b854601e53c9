use crate::billing::{
    compute_bill,
    config::BillingConfig,
    error::ValidationError,
    mode::BillingMode,
    reading::MeterReading,
    result::BillResult,
};

/// Immutable snapshot of everything a bill is computed from.
#[derive(Copy, Clone, Debug, PartialEq, bon::Builder)]
pub struct BillInputs {
    #[builder(default)]
    pub mode: BillingMode,

    pub main: MeterReading,

    /// Only consulted in dual mode.
    pub sub: Option<MeterReading>,

    #[builder(default)]
    pub config: BillingConfig,
}

impl BillInputs {
    pub fn compute(&self) -> Result<BillResult, ValidationError> {
        compute_bill(self.mode, self.main, self.sub, self.config)
    }
}

/// Form values as typed by the user.
#[derive(Clone, Debug, Default)]
pub struct RawInputs {
    pub main_previous: String,
    pub main_current: String,
    pub sub_previous: String,
    pub sub_current: String,
    pub demand_charge: String,
    pub vat_rate: String,
}

impl RawInputs {
    /// The sub-meter readings are kept in single mode too, so that a saved record holds what
    /// was entered. The engine ignores them there.
    pub fn parse(&self, mode: BillingMode) -> BillInputs {
        let main = MeterReading::new(
            parse_or_zero(&self.main_previous),
            parse_or_zero(&self.main_current),
        );
        let sub =
            MeterReading::new(parse_or_zero(&self.sub_previous), parse_or_zero(&self.sub_current));
        BillInputs::builder()
            .mode(mode)
            .main(main)
            .sub(sub)
            .config(BillingConfig::new(
                parse_or_zero(&self.demand_charge),
                parse_or_zero(&self.vat_rate),
            ))
            .build()
    }
}

/// Parse the leading decimal number of the string, falling back to zero.
///
/// Trailing garbage is ignored (`"12.5 kWh"` is `12.5`). Empty, non-numeric and non-finite
/// input yields zero.
#[must_use]
pub fn parse_or_zero(raw: &str) -> f64 {
    let raw = raw.trim_start();
    let bytes = raw.as_bytes();
    let is_digit_at = |index: usize| bytes.get(index).is_some_and(u8::is_ascii_digit);

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_start = end;
    while is_digit_at(end) {
        end += 1;
    }
    let mut n_digits = end - integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while is_digit_at(fraction_end) {
            fraction_end += 1;
        }
        if fraction_end > fraction_start {
            n_digits += fraction_end - fraction_start;
            end = fraction_end;
        }
    }
    if n_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while is_digit_at(exponent_end) {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    raw[..end].parse::<f64>().ok().filter(|value| value.is_finite()).unwrap_or(0.0)
}
