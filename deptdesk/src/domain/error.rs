//! Domain-level error types.
//!
//! These errors are transport agnostic. The terminal adapter turns them into
//! rendered notices; nothing here knows about prompts, tables, or Diesel.

use std::fmt;

use super::ports::{CredentialPersistenceError, DepartmentPersistenceError};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Form or search input failed validation before reaching the store.
    InvalidInput,
    /// Credentials did not match a stored user.
    Unauthorized,
    /// The addressed department does not exist.
    NotFound,
    /// The department id is already taken.
    Conflict,
    /// The store could not be opened.
    StoreUnavailable,
    /// A statement against the store failed.
    StoreFailure,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use deptdesk::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("No department found with ID 7");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    code: ErrorCode,
    message: String,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainErrorValidationError {
    /// The message was blank.
    EmptyMessage,
}

impl fmt::Display for DomainErrorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for DomainErrorValidationError {}

impl DomainError {
    /// Create a new error, panicking if validation fails.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, DomainErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(DomainErrorValidationError::EmptyMessage);
        }
        Ok(Self { code, message })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message shown to the user.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// True for failures raised by the store rather than by user input.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::StoreFailure | ErrorCode::StoreUnavailable
        )
    }

    /// Convenience constructor for [`ErrorCode::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::StoreUnavailable`].
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::StoreFailure`].
    pub fn store_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreFailure, message)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DomainError {}

impl From<DepartmentPersistenceError> for DomainError {
    fn from(error: DepartmentPersistenceError) -> Self {
        match error {
            DepartmentPersistenceError::Connection { .. } => {
                Self::store_unavailable(error.to_string())
            }
            DepartmentPersistenceError::Query { .. }
            | DepartmentPersistenceError::UniqueViolation { .. } => {
                Self::store_failure(error.to_string())
            }
        }
    }
}

impl From<CredentialPersistenceError> for DomainError {
    fn from(error: CredentialPersistenceError) -> Self {
        match error {
            CredentialPersistenceError::Connection { .. } => {
                Self::store_unavailable(error.to_string())
            }
            CredentialPersistenceError::Query { .. } => Self::store_failure(error.to_string()),
        }
    }
}
