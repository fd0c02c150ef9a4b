//! Domain layer: department records, the list and form components, the
//! login gate, and the ports they depend on.
//!
//! Nothing in here touches the terminal or SQLite. Adapters drive these
//! components through plain method calls and render the returned values.
//!
//! Conventions:
//! - Components receive `Arc<dyn Port>` handles at construction.
//! - Failures are [`Error`] values with a stable [`ErrorCode`]; [`Notice`]
//!   turns them into something to show the user.

pub mod auth;
pub mod department;
pub mod department_form;
pub mod department_list;
pub mod error;
pub mod notice;
pub mod ports;
pub mod registration;
pub mod session;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::department::{Department, DepartmentDraft, DepartmentId};
pub use self::department_form::{
    DepartmentForm, FormField, FormFields, FormOutcome, FormProfile, FormValidationError,
};
pub use self::department_list::{DepartmentList, INVALID_SEARCH_ID, SearchOutcome};
pub use self::error::{DomainError as Error, DomainErrorValidationError, ErrorCode};
pub use self::notice::{Notice, Severity};
pub use self::registration::{
    REGISTRATION_ACKNOWLEDGEMENT, RegistrationRequest, RegistrationValidationError,
};
pub use self::session::{Session, SessionState};
