use alertdecoder::decode;
use alertdecoder::domain::values::action_type::ActionType;
use alertdecoder::domain::values::alert_type::AlertType;
use alertdecoder::domain::values::bias::Bias;
use alertdecoder::domain::values::confidence::ConfidenceLevel;
use alertdecoder::domain::values::timeframe::Timeframe;
use alertdecoder::domain::values::urgency::Urgency;

#[test]
fn test_full_alert_message() {
    let alert = decode(
        "🚨 Ticker: NVDA Current Price: $954.73 Target: $1000 Stop loss: $900 \
         This is a breakout setup, buy now!",
    );

    assert_eq!(alert.ticker.as_deref(), Some("NVDA"));
    assert_eq!(alert.price.as_deref(), Some("$954.73"));
    assert_eq!(alert.target.as_deref(), Some("$1000"));
    assert_eq!(alert.stop.as_deref(), Some("$900"));
    assert_eq!(alert.action, ActionType::BuyLong);
    assert_eq!(alert.setup.as_deref(), Some("Breakout Setup"));
    assert_eq!(alert.alert_type, AlertType::AlertWarning);
    assert_eq!(alert.bias, Bias::Bullish);
    assert_eq!(alert.urgency, Urgency::High);
}

#[test]
fn test_watch_message() {
    let alert = decode("Watch SPY closely today, could break resistance at 450.");

    assert_eq!(alert.ticker.as_deref(), Some("SPY"));
    assert_eq!(alert.action, ActionType::WatchMonitor);
    assert_eq!(alert.resistance.as_deref(), Some("$450"));
    assert_eq!(alert.timeframe, Some(Timeframe::Intraday));
    assert_eq!(alert.urgency, Urgency::Medium);
    assert_eq!(alert.alert_type, AlertType::Information);
}

#[test]
fn test_ticker_extraction_forms() {
    assert_eq!(decode("Ticker: AMD looking good").ticker.as_deref(), Some("AMD"));
    assert_eq!(decode("Loading up on $tsla here").ticker.as_deref(), Some("TSLA"));
    // Loose fallback: first short all-caps token wins
    assert_eq!(decode("watching AAPL this morning").ticker.as_deref(), Some("AAPL"));
}

#[test]
fn test_entry_zone_range() {
    let alert = decode("Ticker: PLTR Entry zone: 12.50-13.20, swing position");
    assert_eq!(alert.entry.as_deref(), Some("$12.50-13.20"));
    assert_eq!(alert.timeframe, Some(Timeframe::SwingTrade));
}

#[test]
fn test_support_and_float() {
    let alert = decode("Ticker: GME support at 22.50, float of 75M shares");
    assert_eq!(alert.support.as_deref(), Some("$22.50"));
    assert_eq!(alert.float_size.as_deref(), Some("75M"));
}

#[test]
fn test_float_keyword_fallback() {
    let alert = decode("Ticker: KOSS low float runner");
    assert_eq!(alert.float_size.as_deref(), Some("Low Float"));
}

#[test]
fn test_currency_fields_always_dollar_prefixed() {
    let alert = decode("Ticker: TSLA price 250 target 300 stop 240 support 230 resistance 260");
    for field in [
        &alert.price,
        &alert.target,
        &alert.stop,
        &alert.support,
        &alert.resistance,
    ] {
        let value = field.as_deref().expect("field should be captured");
        assert!(value.starts_with('$'), "{value} should start with $");
    }
}

#[test]
fn test_catalyst_sentence_extraction() {
    let alert = decode("Ticker: MRNA strong setup. FDA approval decision expected Friday. Watch it.");
    let catalysts = alert.catalysts.expect("catalyst sentence should be found");
    assert!(catalysts.contains("FDA approval"));
}

#[test]
fn test_catalyst_truncation_law() {
    let filler = "a".repeat(140);
    let message = format!("Ticker: XYZ earnings catalyst coming with {filler} more detail. Done.");
    let alert = decode(&message);
    let catalysts = alert.catalysts.expect("catalyst sentence should be found");
    assert!(catalysts.chars().count() <= 103);
    assert!(catalysts.ends_with("..."));
}

#[test]
fn test_confidence_levels() {
    assert_eq!(
        decode("Ticker: NVDA high conviction buy here").confidence,
        ConfidenceLevel::High
    );
    assert_eq!(
        decode("Ticker: AMD likely to move this week").confidence,
        ConfidenceLevel::Medium
    );
    assert_eq!(
        decode("Ticker: SNDL pure lotto play, be careful").confidence,
        ConfidenceLevel::Low
    );
}

#[test]
fn test_explicit_setup_capture() {
    let alert = decode("Ticker: AMC Setup: gap and go off the open. Target: 5.50");
    assert_eq!(alert.setup.as_deref(), Some("gap and go off the open"));
}
