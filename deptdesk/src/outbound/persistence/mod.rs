//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports. Adapters are
//! thin: they translate between Diesel rows (`models.rs`, `schema.rs`,
//! internal only) and domain types, and map every Diesel failure into the
//! port's error type.
//!
//! Every call is synchronous and opens its own connection from a
//! [`SqliteStore`]; nothing is pooled or kept open between calls.
//!
//! # Example
//!
//! ```ignore
//! use deptdesk::outbound::persistence::{DieselDepartmentRepository, SqliteStore};
//!
//! let store = SqliteStore::open("deptdesk.db")?;
//! let repo = DieselDepartmentRepository::new(store);
//! ```

mod connection;
mod diesel_credential_repository;
mod diesel_department_repository;
mod diesel_error_mapping;
mod diesel_login_service;
mod models;
mod schema;

pub use connection::{MIGRATIONS, SqliteStore, StoreError};
pub use diesel_credential_repository::DieselCredentialRepository;
pub use diesel_department_repository::DieselDepartmentRepository;
pub use diesel_login_service::{DieselLoginService, INVALID_CREDENTIALS};
