use crate::domain::entities::alert_record::AlertRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::alert_repository::{AlertRepository, QueryFilter};
use crate::domain::values::action_type::ActionType;
use crate::domain::values::bias::Bias;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct QueryUseCase {
    repo: Arc<dyn AlertRepository>,
}

impl QueryUseCase {
    pub fn new(repo: Arc<dyn AlertRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(
        &self,
        ticker: Option<String>,
        bias: Option<Bias>,
        action: Option<ActionType>,
        since: Option<DateTime<Utc>>,
        limit: Option<usize>,
    ) -> Result<Vec<AlertRecord>, DomainError> {
        self.repo.query(&QueryFilter {
            ticker: ticker.map(|t| t.to_uppercase()),
            bias,
            action,
            since,
            limit,
        })
    }

    pub fn get(&self, id: &str) -> Result<AlertRecord, DomainError> {
        self.repo
            .get_by_id(id)?
            .ok_or_else(|| DomainError::NotFound(format!("alert {id}")))
    }
}
