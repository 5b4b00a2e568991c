//! Session types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random session ID.
    pub fn generate() -> Self {
        Self(format!("sess_{:016x}", rand::random::<u64>()))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The signed-in user, as the checkout form prefill sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number, if known.
    pub phone: Option<String>,
}

/// A live signed-in session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Session ID.
    pub id: SessionId,
    /// The signed-in user.
    pub user: UserProfile,
    /// Unix timestamp the session started.
    pub started_at: i64,
}

impl Session {
    /// Start a session for a user.
    pub fn start(user: UserProfile) -> Self {
        Self {
            id: SessionId::generate(),
            user,
            started_at: current_timestamp(),
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_differ() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn session_carries_the_user() {
        let session = Session::start(UserProfile {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            phone: None,
        });
        assert_eq!(session.user.email, "test@example.com");
        assert!(session.id.as_str().starts_with("sess_"));
    }
}
