//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password left empty; rejected before any delay starts.
    #[error("missing credentials")]
    MissingCredentials,

    /// Credentials do not match the demo pair.
    #[error("invalid credentials")]
    InvalidCredentials,
}
