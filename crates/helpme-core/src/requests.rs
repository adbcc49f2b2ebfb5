//! Request payloads sent to the remote API.
//!
//! Field names on the wire are the server's (Portuguese) names; the Rust
//! field names follow them so the payloads serialize without renames.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub senha: String,
}

impl Credentials {
    #[must_use]
    pub fn new(login: impl Into<String>, senha: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            senha: senha.into(),
        }
    }
}

/// Body of `POST /cadastroUsuario`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationData {
    pub nome: String,
    pub email: String,
    pub login: String,
    pub senha: String,
    pub companhia: String,
}

impl RegistrationData {
    /// Build a registration payload. A blank company falls back to the
    /// person's name, which is what the server expects for individual drivers.
    #[must_use]
    pub fn new(
        nome: impl Into<String>,
        email: impl Into<String>,
        login: impl Into<String>,
        senha: impl Into<String>,
        companhia: Option<String>,
    ) -> Self {
        let nome = nome.into();
        let companhia = companhia
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| nome.clone());
        Self {
            nome,
            email: email.into(),
            login: login.into(),
            senha: senha.into(),
            companhia,
        }
    }
}

/// Body of `POST /resetDeSenha`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetRequest {
    pub login: String,
}

/// Body of `POST /validaTokenResetDeSenha`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetTokenCheck {
    pub login: String,
    pub token: String,
}

/// Body of `POST /alteraSenha`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordChange {
    pub login: String,
    pub senha: String,
    pub token: String,
}
