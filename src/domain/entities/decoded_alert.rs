use crate::domain::values::action_type::ActionType;
use crate::domain::values::alert_type::AlertType;
use crate::domain::values::bias::Bias;
use crate::domain::values::confidence::ConfidenceLevel;
use crate::domain::values::risk::Risk;
use crate::domain::values::timeframe::Timeframe;
use crate::domain::values::urgency::Urgency;
use serde::{Deserialize, Serialize};

/// Result record of one decode pass. Every field is extracted independently
/// from the same immutable message text; the optional fields stay `None` when
/// no pattern matched, the enum fields fall back to their documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedAlert {
    /// Uppercased 1-5 letter symbol, if any pattern matched.
    pub ticker: Option<String>,
    /// Currency fields always carry a leading "$" when present.
    pub price: Option<String>,
    pub entry: Option<String>,
    pub target: Option<String>,
    pub stop: Option<String>,
    pub support: Option<String>,
    pub resistance: Option<String>,
    pub float_size: Option<String>,
    pub timeframe: Option<Timeframe>,
    pub setup: Option<String>,
    /// First catalyst-bearing sentence, truncated to 100 chars + "...".
    pub catalysts: Option<String>,
    pub action: ActionType,
    pub alert_type: AlertType,
    pub bias: Bias,
    pub urgency: Urgency,
    pub confidence: ConfidenceLevel,
    pub risk: Risk,
    pub summary: String,
}

impl DecodedAlert {
    /// Numeric value of the extracted price, ignoring the "$" prefix.
    /// Range captures parse up to the first non-numeric character.
    pub fn price_value(&self) -> Option<f64> {
        let raw = self.price.as_deref()?.trim_start_matches('$');
        let numeric: String = raw
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        numeric.parse().ok()
    }
}
