use alertdecoder::decode;
use alertdecoder::domain::decoder::summary::FALLBACK_SUMMARY;
use alertdecoder::domain::values::action_type::ActionType;
use alertdecoder::domain::values::alert_type::AlertType;
use alertdecoder::domain::values::bias::Bias;
use alertdecoder::domain::values::confidence::ConfidenceLevel;
use alertdecoder::domain::values::risk::Risk;
use alertdecoder::domain::values::urgency::Urgency;

#[test]
fn test_keyword_free_message_resolves_every_default() {
    let alert = decode("hello there, just some general remarks");

    assert_eq!(alert.ticker, None);
    assert_eq!(alert.price, None);
    assert_eq!(alert.entry, None);
    assert_eq!(alert.target, None);
    assert_eq!(alert.stop, None);
    assert_eq!(alert.support, None);
    assert_eq!(alert.resistance, None);
    assert_eq!(alert.float_size, None);
    assert_eq!(alert.timeframe, None);
    assert_eq!(alert.setup, None);
    assert_eq!(alert.catalysts, None);
    assert_eq!(alert.action, ActionType::Unspecified);
    assert_eq!(alert.alert_type, AlertType::Information);
    assert_eq!(alert.bias, Bias::Neutral);
    assert_eq!(alert.urgency, Urgency::Low);
    assert_eq!(alert.confidence, ConfidenceLevel::Unspecified);
    assert_eq!(alert.risk, Risk::DefaultModerate);
    assert_eq!(alert.summary, FALLBACK_SUMMARY);
}

#[test]
fn test_empty_string_is_total() {
    let alert = decode("");
    assert_eq!(alert.ticker, None);
    assert_eq!(alert.bias, Bias::Neutral);
    assert_eq!(alert.summary, FALLBACK_SUMMARY);
}

#[test]
fn test_decode_is_idempotent() {
    let message = "🚨 Ticker: NVDA Current Price: $954.73 Target: $1000 buy now!";
    assert_eq!(decode(message), decode(message));

    let message = "nothing interesting here";
    assert_eq!(decode(message), decode(message));
}

#[test]
fn test_arbitrary_garbage_never_panics() {
    for message in [
        "....!!!???",
        "$ $$ $$$",
        "Ticker:",
        "price: target: stop:",
        "日本語のメッセージ 🚀🚀🚀",
        "\n\t\r",
    ] {
        let _ = decode(message);
    }
}
