use serde::{Deserialize, Serialize};

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum BillingMode {
    /// One meter, one payer.
    #[default]
    #[display("single")]
    Single,

    /// Main meter for the whole premises and a sub-meter carving out the tenant's share.
    #[display("dual")]
    Dual,
}

impl BillingMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single Meter",
            Self::Dual => "Dual Meter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&BillingMode::Dual).unwrap(), r#""dual""#);
        assert_eq!(serde_json::from_str::<BillingMode>(r#""single""#).unwrap(), BillingMode::Single);
    }
}
