use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suggested action extracted from an alert message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    BuyLong,
    SellExit,
    ShortBearish,
    WatchMonitor,
    #[default]
    Unspecified,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::BuyLong => write!(f, "Buy/Long"),
            ActionType::SellExit => write!(f, "Sell/Exit"),
            ActionType::ShortBearish => write!(f, "Short/Bearish"),
            ActionType::WatchMonitor => write!(f, "Watch/Monitor"),
            ActionType::Unspecified => write!(f, "Unspecified"),
        }
    }
}

impl FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" | "long" | "buy/long" | "buy_long" => Ok(ActionType::BuyLong),
            "sell" | "exit" | "sell/exit" | "sell_exit" => Ok(ActionType::SellExit),
            "short" | "bearish" | "short/bearish" | "short_bearish" => Ok(ActionType::ShortBearish),
            "watch" | "monitor" | "watch/monitor" | "watch_monitor" => Ok(ActionType::WatchMonitor),
            "unspecified" => Ok(ActionType::Unspecified),
            _ => Err(format!("Unknown action type: {s}")),
        }
    }
}
