use crate::domain::decoder::decode;
use crate::domain::entities::alert_record::AlertRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::alert_repository::AlertRepository;
use std::sync::Arc;

pub struct DecodeUseCase {
    repo: Arc<dyn AlertRepository>,
}

impl DecodeUseCase {
    pub fn new(repo: Arc<dyn AlertRepository>) -> Self {
        Self { repo }
    }

    /// Decodes one pasted message into an `AlertRecord`, optionally persisting
    /// it to the log. Empty or whitespace-only input is rejected here, before
    /// the engine runs; the engine itself never fails.
    pub fn execute(
        &self,
        message: &str,
        source: Option<String>,
        save: bool,
    ) -> Result<AlertRecord, DomainError> {
        if message.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "empty alert message".to_string(),
            ));
        }

        let decoded = decode(message);
        let record = AlertRecord::new(message.to_string(), source, decoded);
        if save {
            self.repo.add(&record)?;
        }
        Ok(record)
    }
}
