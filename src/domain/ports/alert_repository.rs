use crate::domain::entities::alert_record::AlertRecord;
use crate::domain::error::DomainError;
use crate::domain::values::action_type::ActionType;
use crate::domain::values::bias::Bias;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    pub ticker: Option<String>,
    pub bias: Option<Bias>,
    pub action: Option<ActionType>,
    pub since: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct AlertStats {
    pub total_alerts: usize,
    pub by_bias: Vec<(String, usize)>,
    pub by_action: Vec<(String, usize)>,
    pub by_alert_type: Vec<(String, usize)>,
    pub top_tickers: Vec<TickerCount>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct TickerCount {
    pub ticker: String,
    pub count: usize,
}

pub trait AlertRepository: Send + Sync {
    fn add(&self, record: &AlertRecord) -> Result<(), DomainError>;
    fn query(&self, filter: &QueryFilter) -> Result<Vec<AlertRecord>, DomainError>;
    fn get_by_id(&self, id: &str) -> Result<Option<AlertRecord>, DomainError>;
    fn stats(&self) -> Result<AlertStats, DomainError>;
}
