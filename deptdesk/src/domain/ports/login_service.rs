//! Driving port for the login use-case.
//!
//! The session state machine calls this port to check credentials without
//! knowing the backing store, so session tests can substitute a double.

use crate::domain::{Error, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
pub trait LoginService: Send + Sync {
    /// Accept the credentials or explain the rejection.
    ///
    /// Store failures are rejections too: the gate fails closed.
    fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), Error>;

    /// Boolean view of [`LoginService::authenticate`].
    fn is_authenticated(&self, credentials: &LoginCredentials) -> bool {
        self.authenticate(credentials).is_ok()
    }
}
