//! SQLite-based persistence.
//!
//! Provides storage for:
//! - The progress record slot (key-value store, single writer)
//! - Completed focus sessions and their daily/all-time aggregates

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

use super::data_dir;

/// Aggregates over the completed-session history.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Stats {
    pub sessions: u64,
    pub focus_min: u64,
}

/// SQLite database for FocusLearn state.
///
/// Holds the kv store backing the progress slot and the append-only session
/// history.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/focuslearn.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir().map_err(|err| StoreError::DataDir(err.to_string()))?;
        Self::open_at(&dir.join("focuslearn.db"))
    }

    /// Open (or create) a database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests and ephemeral use).
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::OpenFailed {
            path: ":memory:".into(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS sessions (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                duration_min INTEGER NOT NULL,
                completed_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_sessions_completed_at ON sessions(completed_at);",
        )?;
        Ok(())
    }

    /// Read a kv slot. `Ok(None)` when the key has never been written.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Write a kv slot, replacing any previous value (last writer wins).
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Append a completed focus session to the history.
    pub fn record_session(
        &self,
        duration_min: u32,
        completed_at: DateTime<Utc>,
    ) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO sessions (duration_min, completed_at) VALUES (?1, ?2)",
            params![duration_min, completed_at.to_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn stats_today(&self) -> Result<Stats, StoreError> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let stats = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(duration_min), 0)
             FROM sessions
             WHERE completed_at >= ?1",
            params![format!("{today}T00:00:00+00:00")],
            |row| {
                Ok(Stats {
                    sessions: row.get(0)?,
                    focus_min: row.get(1)?,
                })
            },
        )?;
        Ok(stats)
    }

    pub fn stats_all(&self) -> Result<Stats, StoreError> {
        let stats = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(duration_min), 0) FROM sessions",
            [],
            |row| {
                Ok(Stats {
                    sessions: row.get(0)?,
                    focus_min: row.get(1)?,
                })
            },
        )?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn kv_get_returns_none_for_unwritten_key() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("progress").unwrap().is_none());
    }

    #[test]
    fn kv_set_overwrites() {
        let db = Database::open_memory().unwrap();
        db.kv_set("progress", "one").unwrap();
        db.kv_set("progress", "two").unwrap();
        assert_eq!(db.kv_get("progress").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn recorded_sessions_aggregate() {
        let db = Database::open_memory().unwrap();
        db.record_session(25, Utc::now()).unwrap();
        db.record_session(25, Utc::now()).unwrap();

        let stats = db.stats_all().unwrap();
        assert_eq!(stats.sessions, 2);
        assert_eq!(stats.focus_min, 50);
    }

    #[test]
    fn todays_stats_exclude_older_sessions() {
        let db = Database::open_memory().unwrap();
        db.record_session(25, Utc::now() - Duration::days(2)).unwrap();
        db.record_session(25, Utc::now()).unwrap();

        let today = db.stats_today().unwrap();
        assert_eq!(today.sessions, 1);
        assert_eq!(today.focus_min, 25);

        let all = db.stats_all().unwrap();
        assert_eq!(all.sessions, 2);
    }

    #[test]
    fn open_at_creates_the_file_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("focuslearn.db");
        {
            let db = Database::open_at(&path).unwrap();
            db.kv_set("progress", "persisted").unwrap();
        }
        let db = Database::open_at(&path).unwrap();
        assert_eq!(db.kv_get("progress").unwrap().as_deref(), Some("persisted"));
    }
}
