//! Access requests from the login screen.
//!
//! There is no delivery channel: a valid request is acknowledged and logged,
//! and nothing is written to the store.

use std::fmt;

use tracing::info;

/// Acknowledgement shown after a request is accepted.
pub const REGISTRATION_ACKNOWLEDGEMENT: &str =
    "Registration request sent to admin. Please wait for approval.";

/// A field left blank on the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationValidationError {
    missing: Vec<&'static str>,
}

impl RegistrationValidationError {
    /// Labels of the blank fields, in form order.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please fill in: {}", self.missing.join(", "))
    }
}

impl std::error::Error for RegistrationValidationError {}

/// A request for an account, addressed to an administrator.
///
/// # Examples
/// ```
/// use deptdesk::domain::RegistrationRequest;
///
/// let request = RegistrationRequest::try_from_parts("Ada", "ada@x.edu", "Lecturer").unwrap();
/// assert_eq!(request.name(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    name: String,
    email: String,
    designation: String,
}

impl RegistrationRequest {
    /// Validate the three form fields; each must be non-blank.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        designation: &str,
    ) -> Result<Self, RegistrationValidationError> {
        let fields = [
            ("Name", name),
            ("Email", email),
            ("Designation", designation),
        ];
        let missing: Vec<&'static str> = fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label)
            .collect();
        if !missing.is_empty() {
            return Err(RegistrationValidationError { missing });
        }

        Ok(Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            designation: designation.trim().to_owned(),
        })
    }

    /// Requester name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Requester email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Requester designation.
    pub fn designation(&self) -> &str {
        self.designation.as_str()
    }

    /// Hand the request off and return the acknowledgement text.
    pub fn submit(self) -> &'static str {
        info!(
            name = %self.name,
            email = %self.email,
            designation = %self.designation,
            "registration request received"
        );
        REGISTRATION_ACKNOWLEDGEMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "a@x.edu", "Lecturer", &["Name"])]
    #[case("Ada", "   ", "", &["Email", "Designation"])]
    #[case(" ", " ", " ", &["Name", "Email", "Designation"])]
    fn blank_fields_are_reported_together(
        #[case] name: &str,
        #[case] email: &str,
        #[case] designation: &str,
        #[case] expected: &[&str],
    ) {
        let err = RegistrationRequest::try_from_parts(name, email, designation)
            .expect_err("blank fields must fail");
        assert_eq!(err.missing(), expected);
    }

    #[rstest]
    fn submit_acknowledges_request() {
        let request = RegistrationRequest::try_from_parts(" Ada ", "ada@x.edu", "Lecturer")
            .expect("valid request");
        assert_eq!(request.name(), "Ada");
        assert_eq!(request.submit(), REGISTRATION_ACKNOWLEDGEMENT);
    }
}
