//! Department records manager behind a login gate.
//!
//! Layout:
//! - [`domain`]: records, the list and form components, the login session,
//!   and the ports they use.
//! - [`outbound`]: SQLite adapters for those ports.
//! - [`inbound`]: the terminal shell that drives the domain.
//! - [`config`]: layered settings for the binary.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

#[cfg(feature = "test-support")]
pub mod test_support;
