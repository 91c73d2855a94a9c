use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    Intraday,
    SwingTrade,
    LongTerm,
    ShortTerm,
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeframe::Intraday => write!(f, "Intraday"),
            Timeframe::SwingTrade => write!(f, "Swing Trade"),
            Timeframe::LongTerm => write!(f, "Long-term"),
            Timeframe::ShortTerm => write!(f, "Short-term"),
        }
    }
}
