//! Login credentials checked against the `users` table.
//!
//! Comparison is exact and case-sensitive, so neither field is trimmed or
//! folded here; the constructor only rejects values that can never match.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when login inputs are unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was empty.
    EmptyUsername,
    /// Password was empty.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Username/password pair submitted at the login screen.
///
/// ## Invariants
/// - Both fields are non-empty and kept verbatim, whitespace included.
/// - The password buffer is zeroed on drop.
///
/// # Examples
/// ```
/// use deptdesk::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("admin", "s3cret").unwrap();
/// assert_eq!(creds.username(), "admin");
/// assert_eq!(creds.password(), "s3cret");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username exactly as typed.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password exactly as typed.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
