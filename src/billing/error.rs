use crate::billing::reading::Meter;

/// Input rejected by the billing engine. Nothing is computed when this is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("current reading of the {0} meter cannot be less than the previous reading")]
    InvalidReading(Meter),

    #[error("sub-meter units cannot exceed main meter units")]
    SubExceedsMain,

    #[error("demand charge and VAT rate must be non-negative numbers")]
    InvalidConfig,
}
