pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::decode::DecodeUseCase;
use crate::application::query::QueryUseCase;
use crate::application::stats::StatsUseCase;
use crate::domain::entities::alert_record::AlertRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::alert_repository::{AlertRepository, AlertStats};
use crate::domain::values::action_type::ActionType;
use crate::domain::values::bias::Bias;
use crate::infrastructure::sqlite::alert_repo::SqliteAlertRepo;
use crate::infrastructure::sqlite::migrations::run_migrations;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::sync::Arc;

pub use crate::domain::decoder::decode;

pub struct AlertDecoder {
    decode_uc: DecodeUseCase,
    query_uc: QueryUseCase,
    stats_uc: StatsUseCase,
}

impl AlertDecoder {
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;

        run_migrations(&conn)?;

        let repo: Arc<dyn AlertRepository> = Arc::new(SqliteAlertRepo::new(conn));

        Ok(Self {
            decode_uc: DecodeUseCase::new(repo.clone()),
            query_uc: QueryUseCase::new(repo.clone()),
            stats_uc: StatsUseCase::new(repo),
        })
    }

    // Delegating methods
    pub fn decode_message(
        &self,
        message: &str,
        source: Option<String>,
        save: bool,
    ) -> Result<AlertRecord, DomainError> {
        self.decode_uc.execute(message, source, save)
    }

    pub fn query(
        &self,
        ticker: Option<String>,
        bias: Option<Bias>,
        action: Option<ActionType>,
        since: Option<DateTime<Utc>>,
        limit: Option<usize>,
    ) -> Result<Vec<AlertRecord>, DomainError> {
        self.query_uc.execute(ticker, bias, action, since, limit)
    }

    pub fn get(&self, id: &str) -> Result<AlertRecord, DomainError> {
        self.query_uc.get(id)
    }

    pub fn stats(&self) -> Result<AlertStats, DomainError> {
        self.stats_uc.stats()
    }
}
