use alertdecoder::decode;
use alertdecoder::domain::decoder::summary::FALLBACK_SUMMARY;

#[test]
fn test_summary_anchors_on_ticker_and_bias() {
    let alert = decode("🚨 Ticker: NVDA Current Price: $954.73 breakout in play, buy now!");
    assert!(alert.summary.starts_with("NVDA is showing a Bullish Alert/Warning alert"));
    assert!(alert.summary.contains("$954.73"));
    assert!(alert.summary.contains("Suggested action: Buy/Long"));
    assert!(alert.summary.contains("Risk:"));
}

#[test]
fn test_summary_includes_target_and_stop_clause() {
    let alert = decode("Ticker: AMD buy here. Target: $185 Stop loss: $170");
    assert!(alert.summary.contains("Target $185 with stop loss $170"));
}

#[test]
fn test_summary_includes_entry_and_timeframe() {
    let alert = decode("Ticker: PLTR swing idea, buy zone: 12.50-13.20");
    assert!(alert.summary.contains("(Swing Trade)"));
    assert!(alert.summary.contains("Entry zone: $12.50-13.20"));
}

#[test]
fn test_summary_includes_catalyst_tail() {
    let alert = decode("Ticker: MRNA watch this. FDA approval decision expected Friday.");
    assert!(alert.summary.contains("Catalyst: FDA approval decision expected Friday"));
}

#[test]
fn test_fallback_summary_without_ticker() {
    let alert = decode("nothing resembling a signal in this text");
    assert_eq!(alert.summary, FALLBACK_SUMMARY);
}

#[test]
fn test_unspecified_action_omits_action_clause() {
    let alert = decode("Ticker: MSFT steady mover, nothing to do yet");
    assert!(!alert.summary.contains("Suggested action"));
}
