use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of alert the message represents. Information is the default when no
/// marker symbol or keyword matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    AlertWarning,
    Update,
    Watchlist,
    Breakout,
    Teaser,
    #[default]
    Information,
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertType::AlertWarning => write!(f, "Alert/Warning"),
            AlertType::Update => write!(f, "Update"),
            AlertType::Watchlist => write!(f, "Watchlist"),
            AlertType::Breakout => write!(f, "Breakout"),
            AlertType::Teaser => write!(f, "Teaser"),
            AlertType::Information => write!(f, "Information"),
        }
    }
}
