//! Text rendering of decode results. Every field gets a labeled line; absent
//! fields render the literal "N/A".

use crate::domain::entities::alert_record::AlertRecord;
use crate::domain::entities::decoded_alert::DecodedAlert;
use std::fmt::Display;

const ABSENT: &str = "N/A";

pub fn render_decoded(alert: &DecodedAlert) -> String {
    let mut lines = Vec::new();
    push_opt(&mut lines, "Ticker", alert.ticker.as_deref());
    push_opt(&mut lines, "Price", alert.price.as_deref());
    push_opt(&mut lines, "Entry", alert.entry.as_deref());
    push_opt(&mut lines, "Target", alert.target.as_deref());
    push_opt(&mut lines, "Stop Loss", alert.stop.as_deref());
    push_opt(&mut lines, "Support", alert.support.as_deref());
    push_opt(&mut lines, "Resistance", alert.resistance.as_deref());
    push_opt(&mut lines, "Float", alert.float_size.as_deref());
    push_opt(
        &mut lines,
        "Timeframe",
        alert.timeframe.map(|t| t.to_string()).as_deref(),
    );
    push(&mut lines, "Action", &alert.action);
    push(&mut lines, "Alert Type", &alert.alert_type);
    push_opt(&mut lines, "Setup", alert.setup.as_deref());
    push_opt(&mut lines, "Catalysts", alert.catalysts.as_deref());
    push(&mut lines, "Bias", &alert.bias);
    push(&mut lines, "Urgency", &alert.urgency);
    push(&mut lines, "Confidence", &alert.confidence);
    push(&mut lines, "Risk", &alert.risk);
    lines.push(String::new());
    lines.push(format!("Summary: {}", alert.summary));
    lines.join("\n")
}

pub fn render_record(record: &AlertRecord) -> String {
    let mut out = format!(
        "Alert {} (decoded {})",
        record.id,
        record.decoded_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let Some(source) = &record.source {
        out.push_str(&format!("\nSource: {source}"));
    }
    out.push_str("\n\n");
    out.push_str(&render_decoded(&record.decoded));
    out
}

fn push(lines: &mut Vec<String>, label: &str, value: &dyn Display) {
    lines.push(format!("{label}: {value}"));
}

fn push_opt(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    lines.push(format!("{label}: {}", value.unwrap_or(ABSENT)));
}
