//! Authentication gate state.
//!
//! A session starts logged out. Only a successful [`LoginService`] check
//! moves it to logged in; there is no attempt counter and no lockout.

use std::sync::Arc;

use tracing::info;

use super::ports::LoginService;
use super::{Error, LoginCredentials, LoginValidationError};

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No user has been accepted yet.
    LoggedOut,
    /// A user passed the credential check.
    LoggedIn {
        /// Username as typed at login.
        username: String,
    },
}

impl From<LoginValidationError> for Error {
    fn from(error: LoginValidationError) -> Self {
        Self::invalid_input(match error {
            LoginValidationError::EmptyUsername => "Please enter your username",
            LoginValidationError::EmptyPassword => "Please enter your password",
        })
    }
}

/// Login state machine over an injected [`LoginService`].
pub struct Session {
    login_service: Arc<dyn LoginService>,
    state: SessionState,
}

impl Session {
    /// Start a logged-out session.
    pub fn new(login_service: Arc<dyn LoginService>) -> Self {
        Self {
            login_service,
            state: SessionState::LoggedOut,
        }
    }

    /// Check the credentials and log in on success.
    ///
    /// Any failure, including a store error, leaves the session logged out.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), Error> {
        let credentials = LoginCredentials::try_from_parts(username, password)?;
        match self.login_service.authenticate(&credentials) {
            Ok(()) => {
                info!(username = credentials.username(), "login accepted");
                self.state = SessionState::LoggedIn {
                    username: credentials.username().to_owned(),
                };
                Ok(())
            }
            Err(error) => {
                info!(username = credentials.username(), code = ?error.code(), "login rejected");
                self.state = SessionState::LoggedOut;
                Err(error)
            }
        }
    }

    /// Return to the logged-out state.
    pub fn logout(&mut self) {
        if let SessionState::LoggedIn { username } = &self.state {
            info!(username = username.as_str(), "logged out");
        }
        self.state = SessionState::LoggedOut;
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// True once a login has succeeded and not been undone.
    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn { .. })
    }

    /// Accepted username, if any.
    pub fn username(&self) -> Option<&str> {
        match &self.state {
            SessionState::LoggedIn { username } => Some(username.as_str()),
            SessionState::LoggedOut => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockLoginService;
    use rstest::rstest;

    fn session_with(service: MockLoginService) -> Session {
        Session::new(Arc::new(service))
    }

    #[rstest]
    fn successful_login_transitions_to_logged_in() {
        let mut service = MockLoginService::new();
        service
            .expect_authenticate()
            .withf(|creds| creds.username() == "admin" && creds.password() == "pw")
            .times(1)
            .return_once(|_| Ok(()));
        let mut session = session_with(service);

        session.login("admin", "pw").expect("login succeeds");

        assert!(session.is_logged_in());
        assert_eq!(session.username(), Some("admin"));
    }

    #[rstest]
    #[case(Error::unauthorized("Invalid username or password!"))]
    #[case(Error::store_unavailable("unable to open database file"))]
    fn failed_login_stays_logged_out(#[case] failure: Error) {
        let mut service = MockLoginService::new();
        let expected = failure.clone();
        service
            .expect_authenticate()
            .times(1)
            .return_once(move |_| Err(failure));
        let mut session = session_with(service);

        let err = session.login("admin", "wrong").expect_err("login fails");

        assert_eq!(err, expected);
        assert_eq!(session.state(), &SessionState::LoggedOut);
    }

    #[rstest]
    #[case("", "pw")]
    #[case("admin", "")]
    fn blank_inputs_never_reach_the_service(#[case] username: &str, #[case] password: &str) {
        let mut service = MockLoginService::new();
        service.expect_authenticate().never();
        let mut session = session_with(service);

        let err = session.login(username, password).expect_err("blank input");

        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert!(!session.is_logged_in());
    }

    #[rstest]
    fn logout_returns_to_logged_out() {
        let mut service = MockLoginService::new();
        service.expect_authenticate().return_once(|_| Ok(()));
        let mut session = session_with(service);
        session.login("admin", "pw").expect("login succeeds");

        session.logout();

        assert_eq!(session.username(), None);
    }
}
