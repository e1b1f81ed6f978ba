//! SQLite-backed durable store.
//!
//! The increment is a single upsert with `RETURNING`, so SQLite performs the
//! create-if-absent and the add under one write lock.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rusqlite::Connection;
use visitcount_core::count::StoreNumber;

use super::{StoreError, VisitStore};

#[derive(Clone)]
pub struct SqliteStore {
    table: String,
    increment_sql: Arc<str>,
    connection: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database file and its table.
    ///
    /// `table` must already be a validated identifier (see `StoreSection::validate`).
    pub async fn open(path: impl Into<PathBuf>, table: impl Into<String>) -> Result<Self, StoreError> {
        let path = path.into();
        let table = table.into();
        tokio::task::spawn_blocking(move || -> Result<Self, StoreError> {
            let conn = open_connection(&path)?;
            tracing::info!(path = %path.display(), table = %table, "sqlite store opened");
            Self::from_connection(conn, table)
        })
        .await?
    }

    pub fn in_memory(table: impl Into<String>) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?, table.into())
    }

    fn from_connection(conn: Connection, table: String) -> Result<Self, StoreError> {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS \"{table}\" (
                path TEXT PRIMARY KEY NOT NULL,
                visit_count INTEGER NOT NULL DEFAULT 0
            );"
        ))?;

        let increment_sql = format!(
            "INSERT INTO \"{table}\" (path, visit_count) VALUES (?1, 1)
             ON CONFLICT(path) DO UPDATE SET visit_count = visit_count + 1
             RETURNING visit_count"
        );

        Ok(Self {
            table,
            increment_sql: increment_sql.into(),
            connection: Arc::new(Mutex::new(conn)),
        })
    }
}

fn open_connection(path: &Path) -> Result<Connection, rusqlite::Error> {
    let conn = Connection::open(path)?;
    let _ = conn.busy_timeout(Duration::from_secs(5));
    let _ = conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
    Ok(conn)
}

#[async_trait]
impl VisitStore for SqliteStore {
    fn table(&self) -> &str {
        &self.table
    }

    async fn increment(&self, path: &str) -> Result<StoreNumber, StoreError> {
        let connection = Arc::clone(&self.connection);
        let sql = Arc::clone(&self.increment_sql);
        let path = path.to_string();

        tokio::task::spawn_blocking(move || -> Result<StoreNumber, StoreError> {
            let conn = connection
                .lock()
                .map_err(|e| StoreError::Backend(format!("failed to acquire sqlite connection: {e}")))?;
            let mut stmt = conn.prepare_cached(&sql)?;
            let visit_count: i64 = stmt.query_row(rusqlite::params![path], |row| row.get(0))?;
            Ok(StoreNumber::from(visit_count))
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_initializes_then_increments() {
        let store = SqliteStore::in_memory("visitor-counts").unwrap();
        assert_eq!(store.increment("/index.html").await.unwrap().as_str(), "1");
        assert_eq!(store.increment("/index.html").await.unwrap().as_str(), "2");
        assert_eq!(store.increment("/about").await.unwrap().as_str(), "1");
    }

    #[tokio::test]
    async fn unusual_keys_are_stored_as_is() {
        let store = SqliteStore::in_memory("visitor-counts").unwrap();
        let key = "/it's \"quoted\"; DROP TABLE x;--";
        assert_eq!(store.increment(key).await.unwrap().as_str(), "1");
        assert_eq!(store.increment(key).await.unwrap().as_str(), "2");
    }
}
