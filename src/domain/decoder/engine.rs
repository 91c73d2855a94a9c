//! Single-pass decode of one free-form alert message. Every field is
//! extracted independently from the same immutable input, so the function is
//! pure, total, and idempotent: no match just leaves the field absent or at
//! its documented default.

use crate::domain::decoder::patterns::*;
use crate::domain::decoder::rules::{first_capture, keyword_hits, normalize_currency};
use crate::domain::decoder::summary;
use crate::domain::entities::decoded_alert::DecodedAlert;
use crate::domain::values::bias::Bias;
use crate::domain::values::risk::Risk;

const CATALYST_MAX_CHARS: usize = 100;
const LOW_PRICE_THRESHOLD: f64 = 5.0;

pub fn decode(message: &str) -> DecodedAlert {
    let ticker = first_capture(&TICKER_PATTERNS, message).map(|t| t.to_uppercase());

    let price = first_capture(&PRICE_PATTERNS, message)
        .map(|c| normalize_currency(&c));
    let entry = first_capture(&ENTRY_PATTERNS, message).map(|c| normalize_currency(&c));
    let target = first_capture(&TARGET_PATTERNS, message).map(|c| normalize_currency(&c));
    let stop = first_capture(&STOP_PATTERNS, message).map(|c| normalize_currency(&c));
    let support = first_capture(&SUPPORT_PATTERNS, message).map(|c| normalize_currency(&c));
    let resistance = first_capture(&RESISTANCE_PATTERNS, message).map(|c| normalize_currency(&c));

    let float_size = first_capture(&FLOAT_PATTERNS, message)
        .or_else(|| FLOAT_RULES.classify(message).map(str::to_string));

    let setup = first_capture(&SETUP_PATTERNS, message)
        .or_else(|| SETUP_RULES.classify(message).map(str::to_string));

    let mut alert = DecodedAlert {
        ticker,
        price,
        entry,
        target,
        stop,
        support,
        resistance,
        float_size,
        timeframe: TIMEFRAME_RULES.classify(message),
        setup,
        catalysts: extract_catalysts(message),
        action: ACTION_RULES.classify(message).unwrap_or_default(),
        alert_type: ALERT_RULES.classify(message).unwrap_or_default(),
        bias: score_bias(message),
        urgency: URGENCY_RULES.classify(message).unwrap_or_default(),
        confidence: CONFIDENCE_RULES.classify(message).unwrap_or_default(),
        risk: Risk::DefaultModerate,
        summary: String::new(),
    };

    alert.risk = RISK_RULES
        .classify(message)
        .unwrap_or_else(|| derive_risk(&alert));
    alert.summary = summary::compose(&alert);
    alert
}

/// Bullish vs. bearish keyword hit counts; strictly greater wins, any tie
/// (including zero hits on both sides) is Neutral.
fn score_bias(message: &str) -> Bias {
    let bullish = keyword_hits(&BULLISH_PATTERNS, message);
    let bearish = keyword_hits(&BEARISH_PATTERNS, message);
    if bullish > bearish {
        Bias::Bullish
    } else if bearish > bullish {
        Bias::Bearish
    } else {
        Bias::Neutral
    }
}

/// Secondary heuristic when the message says nothing explicit about risk.
fn derive_risk(alert: &DecodedAlert) -> Risk {
    if alert
        .price_value()
        .is_some_and(|p| p < LOW_PRICE_THRESHOLD)
    {
        Risk::LowPricedStock
    } else if alert.float_size.as_deref() == Some("Low Float") {
        Risk::LowFloatStock
    } else {
        Risk::DefaultModerate
    }
}

/// First sentence containing a catalyst keyword, truncated to 100 characters
/// plus an ellipsis when longer.
fn extract_catalysts(message: &str) -> Option<String> {
    for sentence in message.split(['.', '!', '?']) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        if CATALYST_KEYWORDS.is_match(sentence) {
            return Some(truncate(sentence, CATALYST_MAX_CHARS));
        }
    }
    None
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bias_tie_is_neutral() {
        assert_eq!(score_bias("one bullish word, one bearish word"), Bias::Neutral);
        assert_eq!(score_bias(""), Bias::Neutral);
    }

    #[test]
    fn test_truncate_char_boundary_safe() {
        let long = "é".repeat(150);
        let out = truncate(&long, 100);
        assert_eq!(out.chars().count(), 103);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_derive_risk_prefers_price_over_float() {
        let mut alert = decode("Ticker: ABCD trading at $3.20, low float play");
        assert_eq!(alert.risk, Risk::LowPricedStock);
        alert = decode("Ticker: ABCD low float play");
        assert_eq!(alert.risk, Risk::LowFloatStock);
    }
}
