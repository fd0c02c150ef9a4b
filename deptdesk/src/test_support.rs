//! Shared helpers for integration tests.
//!
//! Enabled by the `test-support` feature so files under `tests/` can build
//! real stores without duplicating setup.

use std::error::Error;
use std::path::{Path, PathBuf};

use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Text};
use tempfile::TempDir;

use crate::outbound::persistence::SqliteStore;

/// Boxed error returned by the helpers.
pub type TestStoreResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// A migrated store in a private temporary directory, removed on drop.
pub struct TestStore {
    dir: TempDir,
    path: PathBuf,
    store: SqliteStore,
}

impl TestStore {
    /// Create an empty, migrated store.
    pub fn new() -> TestStoreResult<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("deptdesk.db");
        let store = SqliteStore::open(&path)?;
        Ok(Self { dir, path, store })
    }

    /// Store handle for building repositories.
    pub fn store(&self) -> SqliteStore {
        self.store.clone()
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a login account. The application has no write path for users,
    /// so tests seed them with raw SQL.
    pub fn seed_user(&self, username: &str, password: &str) -> TestStoreResult<()> {
        let mut conn = self.connection()?;
        diesel::sql_query("INSERT INTO users (uname, pwd) VALUES (?, ?)")
            .bind::<Text, _>(username)
            .bind::<Text, _>(password)
            .execute(&mut conn)?;
        Ok(())
    }

    /// Insert a department row with only `id` and `dept_name` set, leaving
    /// the other columns `NULL` as a hand-made store might.
    pub fn seed_raw_department(&self, id: i32, name: Option<&str>) -> TestStoreResult<()> {
        let mut conn = self.connection()?;
        diesel::sql_query("INSERT INTO departments (id, dept_name) VALUES (?, ?)")
            .bind::<Integer, _>(id)
            .bind::<Nullable<Text>, _>(name)
            .execute(&mut conn)?;
        Ok(())
    }

    /// Delete the store's directory and return a handle whose connections
    /// now fail.
    pub fn into_unreachable(self) -> TestStoreResult<SqliteStore> {
        let Self { dir, store, .. } = self;
        dir.close()?;
        Ok(store)
    }

    fn connection(&self) -> ConnectionResult<SqliteConnection> {
        SqliteConnection::establish(self.store.database_url())
    }
}
