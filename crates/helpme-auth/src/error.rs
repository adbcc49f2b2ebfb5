use std::path::PathBuf;

use helpme_core::AuthResult;
use thiserror::Error;

/// Message shown when the server does not recognize the credentials.
pub const INVALID_CREDENTIALS: &str = "Usuário ou senha inválidos.";

/// Why an auth operation failed.
///
/// `Display` is the user-facing message; it becomes `AuthResult::message`
/// when the error is folded into a result.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Erro de conexão: {0}")]
    Transport(String),

    #[error("Tempo de requisição excedido")]
    Timeout,

    #[error("Erro no servidor ({0})")]
    Status(u16),

    #[error("Erro de conexão: resposta inválida do servidor ({0})")]
    InvalidResponse(String),

    /// Well-formed 200 response whose content means "no".
    #[error("{0}")]
    Rejected(String),
}

impl AuthError {
    pub(crate) fn invalid_credentials() -> Self {
        Self::Rejected(INVALID_CREDENTIALS.to_string())
    }

    /// Short tag used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Timeout => "timeout",
            Self::Status(_) => "status",
            Self::InvalidResponse(_) => "invalid_response",
            Self::Rejected(_) => "rejected",
        }
    }
}

impl From<AuthError> for AuthResult {
    fn from(error: AuthError) -> Self {
        Self::failure(error.to_string())
    }
}

/// Session store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store key '{0}'")]
    InvalidKey(String),

    #[error("failed to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to delete {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode session record: {0}")]
    Encode(#[from] serde_json::Error),
}
