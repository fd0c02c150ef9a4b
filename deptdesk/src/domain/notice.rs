//! User-facing notices produced by domain operations.
//!
//! A notice pairs a message with a severity; adapters decide how to show
//! it.

use super::{Error, ErrorCode};

/// How prominently a notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Confirmation of a completed action.
    Info,
    /// Rejected input or a missing record; nothing changed.
    Warning,
    /// A failed operation.
    Error,
}

impl Severity {
    /// Lowercase label used by text renderers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A message for the user with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    severity: Severity,
    message: String,
}

impl Notice {
    /// Informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Severity of the notice.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Message text.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl From<&Error> for Notice {
    fn from(error: &Error) -> Self {
        match error.code() {
            ErrorCode::InvalidInput | ErrorCode::NotFound => Self::warning(error.message()),
            _ => Self::error(error.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_input("School ID is required"), Severity::Warning)]
    #[case(Error::not_found("No department found with ID 3"), Severity::Warning)]
    #[case(Error::conflict("Department ID already exists!"), Severity::Error)]
    #[case(Error::store_failure("disk I/O error"), Severity::Error)]
    #[case(Error::unauthorized("Invalid username or password!"), Severity::Error)]
    fn errors_map_to_severity(#[case] error: Error, #[case] expected: Severity) {
        let notice = Notice::from(&error);
        assert_eq!(notice.severity(), expected);
        assert_eq!(notice.message(), error.message());
    }
}
