mod common;

#[test]
fn test_stats_empty_log() {
    let ad = common::setup();
    let stats = ad.stats().unwrap();
    assert_eq!(stats.total_alerts, 0);
    assert!(stats.by_bias.is_empty());
    assert!(stats.top_tickers.is_empty());
}

#[test]
fn test_stats_counts_by_bias_and_ticker() {
    let ad = common::setup();
    ad.decode_message("Ticker: NVDA bullish breakout, buy now", None, true)
        .unwrap();
    ad.decode_message("Ticker: NVDA more upside, strong buy", None, true)
        .unwrap();
    ad.decode_message("Bearish on $TSLA, short the dump", None, true)
        .unwrap();

    let stats = ad.stats().unwrap();
    assert_eq!(stats.total_alerts, 3);

    let bullish = stats
        .by_bias
        .iter()
        .find(|(bias, _)| bias == "Bullish")
        .expect("bullish bucket");
    assert_eq!(bullish.1, 2);

    let top = &stats.top_tickers[0];
    assert_eq!(top.ticker, "NVDA");
    assert_eq!(top.count, 2);
}

#[test]
fn test_stats_counts_actions() {
    let ad = common::setup();
    ad.decode_message("Watch SPY closely today", None, true).unwrap();

    let stats = ad.stats().unwrap();
    let watching = stats
        .by_action
        .iter()
        .find(|(action, _)| action == "Watch/Monitor")
        .expect("watch bucket");
    assert_eq!(watching.1, 1);
}
