use crate::domain::entities::decoded_alert::DecodedAlert;
use crate::domain::values::action_type::ActionType;

pub const FALLBACK_SUMMARY: &str =
    "Could not identify key trading information in this message. Check the format and try again.";

/// Builds the one-paragraph summary by appending a clause for each populated
/// field in a fixed order. Without a ticker there is nothing to anchor the
/// sentence on, so a fixed fallback is emitted instead.
pub fn compose(alert: &DecodedAlert) -> String {
    let Some(ticker) = alert.ticker.as_deref() else {
        return FALLBACK_SUMMARY.to_string();
    };

    let mut out = format!(
        "{} is showing a {} {} alert",
        ticker, alert.bias, alert.alert_type
    );
    if let Some(price) = &alert.price {
        out.push_str(&format!(" at {price}"));
    }
    out.push('.');

    if alert.action != ActionType::Unspecified {
        out.push_str(&format!(" Suggested action: {}", alert.action));
        if let Some(timeframe) = &alert.timeframe {
            out.push_str(&format!(" ({timeframe})"));
        }
        out.push('.');
    }

    if let Some(entry) = &alert.entry {
        out.push_str(&format!(" Entry zone: {entry}."));
    }

    match (&alert.target, &alert.stop) {
        (Some(target), Some(stop)) => {
            out.push_str(&format!(" Target {target} with stop loss {stop}."));
        }
        (Some(target), None) => out.push_str(&format!(" Target {target}.")),
        (None, Some(stop)) => out.push_str(&format!(" Stop loss {stop}.")),
        (None, None) => {}
    }

    if let Some(setup) = &alert.setup {
        out.push_str(&format!(" Setup: {setup}."));
    }
    out.push_str(&format!(" Risk: {}.", alert.risk));

    if let Some(catalysts) = &alert.catalysts {
        out.push_str(&format!(" Catalyst: {catalysts}"));
    }

    out
}
