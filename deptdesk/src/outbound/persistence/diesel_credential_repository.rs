//! SQLite-backed `CredentialRepository`.
//!
//! The lookup binds both values as parameters. SQLite's default `BINARY`
//! collation makes the comparison exact and case-sensitive.

use diesel::prelude::*;

use crate::domain::LoginCredentials;
use crate::domain::ports::{CredentialPersistenceError, CredentialRepository};

use super::connection::SqliteStore;
use super::diesel_error_mapping::{
    DieselFailure, classify_connection_error, classify_diesel_error,
};
use super::schema::users;

/// Diesel-backed implementation of the credential repository port.
#[derive(Debug, Clone)]
pub struct DieselCredentialRepository {
    store: SqliteStore,
}

impl DieselCredentialRepository {
    /// Create a repository over a prepared store.
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }
}

impl From<DieselFailure> for CredentialPersistenceError {
    fn from(failure: DieselFailure) -> Self {
        match failure {
            DieselFailure::Connection(message) => Self::connection(message),
            DieselFailure::UniqueViolation(message) | DieselFailure::Query(message) => {
                Self::query(message)
            }
        }
    }
}

impl CredentialRepository for DieselCredentialRepository {
    fn credentials_match(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<bool, CredentialPersistenceError> {
        let mut conn = self
            .store
            .connect()
            .map_err(|err| CredentialPersistenceError::from(classify_connection_error(err)))?;

        let matches: i64 = users::table
            .filter(users::uname.eq(credentials.username()))
            .filter(users::pwd.eq(credentials.password()))
            .count()
            .get_result(&mut conn)
            .map_err(|err| CredentialPersistenceError::from(classify_diesel_error(err)))?;

        Ok(matches > 0)
    }
}
