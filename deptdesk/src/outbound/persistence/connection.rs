//! Opening the SQLite store.
//!
//! There is no pool. [`SqliteStore`] only remembers where the file lives;
//! each repository call opens its own [`SqliteConnection`], which is closed
//! when it drops at the end of that call.

use std::path::Path;

use diesel::result::ConnectionResult;
use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Fatal errors raised while preparing the store at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The file could not be opened or created.
    #[error("failed to open store at {path}: {message}")]
    Open { path: String, message: String },

    /// The schema could not be brought up to date.
    #[error("failed to prepare store schema: {message}")]
    Schema { message: String },
}

impl StoreError {
    /// Create an open error for `path`.
    pub fn open(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Open {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a schema error with the given message.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }
}

/// Location of a prepared SQLite store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteStore {
    database_url: String,
}

impl SqliteStore {
    /// Open (creating if needed) the store at `path` and apply pending
    /// migrations. Existing tables and rows are left untouched.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = SqliteStore::open("deptdesk.db")?;
    /// let departments = DieselDepartmentRepository::new(store.clone());
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let database_url = path.as_ref().to_string_lossy().into_owned();
        let store = Self { database_url };

        let mut conn = store
            .connect()
            .map_err(|err| StoreError::open(store.database_url.as_str(), err.to_string()))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| StoreError::schema(err.to_string()))?;

        if applied.is_empty() {
            debug!(path = %store.database_url, "store schema up to date");
        } else {
            info!(path = %store.database_url, migrations = applied.len(), "store schema migrated");
        }
        Ok(store)
    }

    /// Path handed to SQLite.
    pub fn database_url(&self) -> &str {
        self.database_url.as_str()
    }

    /// Open a fresh connection for a single repository call.
    pub(crate) fn connect(&self) -> ConnectionResult<SqliteConnection> {
        SqliteConnection::establish(&self.database_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn open_creates_schema_in_new_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("fresh.db");

        let store = SqliteStore::open(&path).expect("store opens");

        assert!(path.exists());
        assert_eq!(store.database_url(), path.to_string_lossy());
    }

    #[rstest]
    fn open_is_idempotent() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("twice.db");

        SqliteStore::open(&path).expect("first open");
        SqliteStore::open(&path).expect("second open");
    }

    #[rstest]
    fn open_fails_for_missing_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("store.db");

        let err = SqliteStore::open(&path).expect_err("directory does not exist");

        assert!(matches!(err, StoreError::Open { .. }));
    }
}
