use crate::domain::decoder::decode;
use crate::domain::entities::alert_record::AlertRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::alert_repository::*;
use chrono::DateTime;
use rusqlite::{params, Connection};
use std::sync::Mutex;

/// Column list used in all SELECT queries. The denormalized ticker/bias/
/// action/alert_type/urgency columns exist for filtering and stats; the
/// decoded column holds the full payload as JSON.
const SELECT_COLS: &str =
    "id, raw_message, source, ticker, bias, action, alert_type, urgency, summary, decoded, decoded_at";

pub struct SqliteAlertRepo {
    conn: Mutex<Connection>,
}

impl SqliteAlertRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_record(row: &rusqlite::Row) -> Result<AlertRecord, rusqlite::Error> {
        let raw_message: String = row.get(1)?;
        let decoded_str: String = row.get(9)?;
        let decoded_at_str: String = row.get(10)?;

        let decoded = serde_json::from_str(&decoded_str).unwrap_or_else(|e| {
            eprintln!("Warning: undecodable stored payload ({e}), re-decoding raw message");
            decode(&raw_message)
        });

        Ok(AlertRecord {
            id: row.get(0)?,
            raw_message,
            source: row.get(2)?,
            decoded,
            decoded_at: DateTime::parse_from_rfc3339(&decoded_at_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        })
    }
}

impl AlertRepository for SqliteAlertRepo {
    fn add(&self, record: &AlertRecord) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let decoded_json = serde_json::to_string(&record.decoded)
            .map_err(|e| DomainError::Parse(format!("Failed to serialize decoded alert: {e}")))?;
        conn.execute(
            "INSERT INTO alerts (id, raw_message, source, ticker, bias, action, alert_type, urgency, summary, decoded, decoded_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                record.id,
                record.raw_message,
                record.source,
                record.decoded.ticker,
                record.decoded.bias.to_string(),
                record.decoded.action.to_string(),
                record.decoded.alert_type.to_string(),
                record.decoded.urgency.to_string(),
                record.decoded.summary,
                decoded_json,
                record.decoded_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add alert: {e}")))?;
        Ok(())
    }

    fn query(&self, filter: &QueryFilter) -> Result<Vec<AlertRecord>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut sql = format!("SELECT {} FROM alerts WHERE 1=1", SELECT_COLS);
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(ticker) = &filter.ticker {
            sql.push_str(&format!(" AND ticker = ?{}", param_values.len() + 1));
            param_values.push(Box::new(ticker.clone()));
        }
        if let Some(bias) = &filter.bias {
            sql.push_str(&format!(" AND bias = ?{}", param_values.len() + 1));
            param_values.push(Box::new(bias.to_string()));
        }
        if let Some(action) = &filter.action {
            sql.push_str(&format!(" AND action = ?{}", param_values.len() + 1));
            param_values.push(Box::new(action.to_string()));
        }
        if let Some(since) = &filter.since {
            sql.push_str(&format!(" AND decoded_at >= ?{}", param_values.len() + 1));
            param_values.push(Box::new(since.to_rfc3339()));
        }

        sql.push_str(" ORDER BY decoded_at DESC");
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT ?{}", param_values.len() + 1));
            param_values.push(Box::new(limit as i64));
        }

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let records = stmt
            .query_map(params_refs.as_slice(), Self::row_to_record)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(records)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<AlertRecord>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let sql = format!("SELECT {} FROM alerts WHERE id = ?1", SELECT_COLS);
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_record)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }

    fn stats(&self) -> Result<AlertStats, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let total: usize = conn
            .query_row("SELECT COUNT(*) FROM alerts", [], |r| r.get(0))
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let group_counts = |column: &str| -> Result<Vec<(String, usize)>, DomainError> {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {column}, COUNT(*) FROM alerts GROUP BY {column} ORDER BY COUNT(*) DESC"
                ))
                .map_err(|e| DomainError::Database(e.to_string()))?;
            let counts = stmt
                .query_map([], |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, usize>(1)?))
                })
                .map_err(|e| DomainError::Database(e.to_string()))?
                .filter_map(|r| r.ok())
                .collect();
            Ok(counts)
        };

        let by_bias = group_counts("bias")?;
        let by_action = group_counts("action")?;
        let by_alert_type = group_counts("alert_type")?;

        let mut stmt = conn
            .prepare(
                "SELECT ticker, COUNT(*) as cnt FROM alerts WHERE ticker IS NOT NULL
                 GROUP BY ticker ORDER BY cnt DESC LIMIT 10",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let top_tickers = stmt
            .query_map([], |row| {
                Ok(TickerCount {
                    ticker: row.get(0)?,
                    count: row.get(1)?,
                })
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(AlertStats {
            total_alerts: total,
            by_bias,
            by_action,
            by_alert_type,
            top_tickers,
        })
    }
}
