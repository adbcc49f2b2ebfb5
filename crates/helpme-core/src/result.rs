use serde::{Deserialize, Serialize};

use crate::user::User;

/// Uniform outcome of every auth operation.
///
/// Failures of any kind (transport, timeout, HTTP status, rejected by the
/// server) arrive here as `success == false` with a message meant to be shown
/// to the user verbatim. `user` is only ever set by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl AuthResult {
    /// Successful login carrying the new session record.
    #[must_use]
    pub const fn authenticated(user: User) -> Self {
        Self {
            success: true,
            message: None,
            user: Some(user),
        }
    }

    /// Success with an informational message.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            user: None,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            user: None,
        }
    }

    /// Message text, or `fallback` when the result carries none.
    #[must_use]
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}
