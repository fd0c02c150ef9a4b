//! Diesel-backed `LoginService` adapter built on `DieselCredentialRepository`.
//!
//! A store error rejects the login like a bad password would; it is logged
//! and surfaced so the user learns the store is the problem.

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::{CredentialRepository, LoginService};
use crate::domain::{Error, LoginCredentials};

use super::diesel_credential_repository::DieselCredentialRepository;

/// Message shown when no stored user matches.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password!";

/// `LoginService` that checks credentials against the `users` table.
#[derive(Clone)]
pub struct DieselLoginService {
    credential_repository: Arc<dyn CredentialRepository>,
}

impl DieselLoginService {
    /// Create a new service backed by a Diesel credential repository.
    pub fn new(credential_repository: DieselCredentialRepository) -> Self {
        Self {
            credential_repository: Arc::new(credential_repository),
        }
    }

    #[cfg(test)]
    fn from_repository(credential_repository: Arc<dyn CredentialRepository>) -> Self {
        Self {
            credential_repository,
        }
    }
}

impl LoginService for DieselLoginService {
    fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), Error> {
        match self.credential_repository.credentials_match(credentials) {
            Ok(true) => Ok(()),
            Ok(false) => Err(Error::unauthorized(INVALID_CREDENTIALS)),
            Err(error) => {
                warn!(%error, username = credentials.username(), "credential lookup failed");
                Err(error.into())
            }
        }
    }
}
