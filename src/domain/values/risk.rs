use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk assessment of an alert. Explicit keyword matches map to the first
/// three variants; the rest are derived when the message says nothing about
/// risk itself (sub-$5 price, low float, or nothing at all).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Risk {
    High,
    Moderate,
    Low,
    LowPricedStock,
    LowFloatStock,
    #[default]
    DefaultModerate,
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Risk::High => write!(f, "High Risk"),
            Risk::Moderate => write!(f, "Moderate Risk"),
            Risk::Low => write!(f, "Low Risk"),
            Risk::LowPricedStock => write!(f, "Higher Risk (Low-priced stock)"),
            Risk::LowFloatStock => write!(f, "Higher Risk (Low Float stock)"),
            Risk::DefaultModerate => write!(f, "Moderate Risk (Default assessment)"),
        }
    }
}
