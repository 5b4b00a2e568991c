//! The simulated login flow.

use crate::deferred::{defer, Deferred};
use crate::error::AuthError;
use crate::session::{Session, UserProfile};
use std::time::Duration;
use tracing::debug;

/// The demo account email.
pub const DEMO_EMAIL: &str = "test@example.com";

/// The demo account password.
pub const DEMO_PASSWORD: &str = "password";

/// Login credentials as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Create credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn is_demo_pair(&self) -> bool {
        self.email == DEMO_EMAIL && self.password == DEMO_PASSWORD
    }
}

/// The fake authentication backend.
///
/// Empty credentials fail immediately, before any delay starts, and
/// mutate nothing. Otherwise the credential check itself runs after the
/// configured fake-network delay, succeeding only for the demo pair.
#[derive(Debug, Clone)]
pub struct SimulatedAuth {
    delay: Duration,
}

impl SimulatedAuth {
    /// The fake network delay the storefront uses for login.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    /// Create a backend with the given fake delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Start a login attempt.
    ///
    /// The returned [`Deferred`] resolves to the session or an
    /// [`AuthError::InvalidCredentials`]; cancel it to abandon the
    /// attempt.
    pub fn login(
        &self,
        credentials: Credentials,
    ) -> Result<Deferred<Result<Session, AuthError>>, AuthError> {
        if credentials.email.trim().is_empty() || credentials.password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        debug!(email = %credentials.email, "simulated login started");
        Ok(defer(self.delay, move || {
            if credentials.is_demo_pair() {
                Ok(Session::start(UserProfile {
                    name: "Test User".to_string(),
                    email: credentials.email,
                    phone: None,
                }))
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }))
    }
}

impl Default for SimulatedAuth {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_auth() -> SimulatedAuth {
        SimulatedAuth::new(Duration::from_millis(5))
    }

    #[test]
    fn empty_credentials_fail_before_the_delay() {
        let auth = fast_auth();
        let result = auth.login(Credentials::new("", "password"));
        assert_eq!(result.unwrap_err(), AuthError::MissingCredentials);

        let result = auth.login(Credentials::new("test@example.com", ""));
        assert_eq!(result.unwrap_err(), AuthError::MissingCredentials);
    }

    #[test]
    fn demo_pair_signs_in_after_the_delay() {
        let auth = fast_auth();
        let pending = auth
            .login(Credentials::new(DEMO_EMAIL, DEMO_PASSWORD))
            .unwrap();

        let session = pending.wait().unwrap().unwrap();
        assert_eq!(session.user.email, DEMO_EMAIL);
    }

    #[test]
    fn wrong_password_is_rejected_after_the_delay() {
        let auth = fast_auth();
        let pending = auth
            .login(Credentials::new(DEMO_EMAIL, "hunter2"))
            .unwrap();

        assert_eq!(pending.wait().unwrap(), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn abandoned_login_never_resolves() {
        let auth = SimulatedAuth::new(Duration::from_millis(50));
        let pending = auth
            .login(Credentials::new(DEMO_EMAIL, DEMO_PASSWORD))
            .unwrap();

        pending.cancel();
        assert!(pending.wait().is_none());
    }
}
