use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::schema::{initialize_schema, parcel_schema};

/// Path that opens a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// SQLite connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqliteConfig {
    /// Path to the SQLite database file, or [`IN_MEMORY`]
    pub db_path: String,
    /// How long a statement waits on a locked database before failing
    pub busy_timeout_ms: u64,
    /// Create the `parcel` table after opening if it is missing
    pub create_schema: bool,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            db_path: "tracker.db".to_string(),
            busy_timeout_ms: 5_000,
            create_schema: true,
        }
    }
}

impl SqliteConfig {
    /// Create a new SQLite config for the given path
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_create_schema(mut self, create_schema: bool) -> Self {
        self.create_schema = create_schema;
        self
    }

    /// Open a connection with this configuration applied.
    pub fn open(&self) -> rusqlite::Result<Connection> {
        tracing::debug!(path = %self.db_path, "opening sqlite database");
        let conn = if self.db_path == IN_MEMORY {
            Connection::open_in_memory()?
        } else {
            Connection::open(&self.db_path)?
        };
        conn.busy_timeout(Duration::from_millis(self.busy_timeout_ms))?;
        if self.create_schema {
            initialize_schema(&conn, &parcel_schema())?;
        }
        Ok(conn)
    }
}
