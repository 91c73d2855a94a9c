use crate::domain::entities::decoded_alert::DecodedAlert;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A decoded alert as stored in the log: the raw pasted text plus the
/// structured decode result and bookkeeping fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: String,
    pub raw_message: String,
    /// Where the message came from (e.g. a channel name), if the caller said.
    pub source: Option<String>,
    pub decoded: DecodedAlert,
    pub decoded_at: DateTime<Utc>,
}

impl AlertRecord {
    pub fn new(raw_message: String, source: Option<String>, decoded: DecodedAlert) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            raw_message,
            source,
            decoded,
            decoded_at: Utc::now(),
        }
    }
}
