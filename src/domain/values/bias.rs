use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentiment inferred from bullish vs. bearish keyword counts. A tie in
/// either direction (including zero hits on both sides) is Neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bias {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bias::Bullish => write!(f, "Bullish"),
            Bias::Bearish => write!(f, "Bearish"),
            Bias::Neutral => write!(f, "Neutral"),
        }
    }
}

impl FromStr for Bias {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bullish" => Ok(Bias::Bullish),
            "bearish" => Ok(Bias::Bearish),
            "neutral" => Ok(Bias::Neutral),
            _ => Err(format!("Unknown bias: {s}")),
        }
    }
}
