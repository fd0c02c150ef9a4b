//! Port abstraction for credential lookups against the `users` table.

use crate::domain::LoginCredentials;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by credential repository adapters.
    pub enum CredentialPersistenceError {
        /// The store could not be opened for this call.
        Connection => "credential store connection failed: {message}",
        /// The lookup failed during execution.
        Query => "credential store query failed: {message}",
    }
}

/// Read-only access to stored credentials. There is no write path.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialRepository: Send + Sync {
    /// True iff a stored user matches both username and password exactly.
    fn credentials_match(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<bool, CredentialPersistenceError>;
}
