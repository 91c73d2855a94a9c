use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS alerts (
            id TEXT PRIMARY KEY,
            raw_message TEXT NOT NULL,
            source TEXT,
            ticker TEXT,
            bias TEXT NOT NULL,
            action TEXT NOT NULL,
            alert_type TEXT NOT NULL,
            urgency TEXT NOT NULL,
            summary TEXT NOT NULL,
            decoded TEXT NOT NULL,
            decoded_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_alerts_ticker ON alerts(ticker);
        CREATE INDEX IF NOT EXISTS idx_alerts_bias ON alerts(bias);
        CREATE INDEX IF NOT EXISTS idx_alerts_decoded_at ON alerts(decoded_at);
        ",
    )
    .map_err(|e| format!("Migration failed: {e}"))
}
