use serde::{Deserialize, Serialize};

/// Role assigned when the server does not report one.
pub const DEFAULT_ROLE: &str = "operador";

/// The authenticated user record.
///
/// Built from the login response, never mutated afterwards. A new login
/// replaces the whole record. The JSON form is what gets persisted in the
/// session store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Opaque session token issued by the server.
    pub token: String,
    #[serde(default, rename = "companhia", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, rename = "apelido", skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// A user counts as signed in only when it carries a non-empty token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}
