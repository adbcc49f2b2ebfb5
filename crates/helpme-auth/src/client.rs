use std::time::Duration;

use helpme_config::ApiConfig;
use helpme_core::{
    AuthResult, Credentials, PasswordChange, PasswordResetRequest, RegistrationData,
    ResetTokenCheck,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::AuthError;

pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/cadastroUsuario";
pub const RESET_ROUTE: &str = "/resetDeSenha";
pub const VALIDATE_TOKEN_ROUTE: &str = "/validaTokenResetDeSenha";
pub const CHANGE_PASSWORD_ROUTE: &str = "/alteraSenha";

const REGISTER_OK: &str = "sucesso";
const PASSWORD_CHANGED: &str = "Senha Alterada";

/// HTTP client for the Help.Me backend.
///
/// Each operation issues exactly one `POST` with a JSON body, bounded by its
/// own timeout. No retries. Failures never escape as errors: every public
/// method returns an [`AuthResult`].
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl AuthClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, timeout)
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS roots, user agent).
    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            timeout,
        }
    }

    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url, config.timeout())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `POST /login`. On success the result carries the new [`User`](helpme_core::User).
    pub async fn login(&self, credentials: &Credentials) -> AuthResult {
        settle(LOGIN_ROUTE, self.try_login(credentials).await)
    }

    /// `POST /cadastroUsuario`.
    pub async fn register(&self, data: &RegistrationData) -> AuthResult {
        settle(REGISTER_ROUTE, self.try_register(data).await)
    }

    /// `POST /resetDeSenha`. Asks the server to send a recovery code.
    pub async fn request_password_reset(&self, login: &str) -> AuthResult {
        settle(RESET_ROUTE, self.try_request_password_reset(login).await)
    }

    /// `POST /validaTokenResetDeSenha`.
    pub async fn validate_reset_token(&self, login: &str, token: &str) -> AuthResult {
        settle(
            VALIDATE_TOKEN_ROUTE,
            self.try_validate_reset_token(login, token).await,
        )
    }

    /// `POST /alteraSenha`.
    pub async fn change_password(&self, login: &str, new_password: &str, token: &str) -> AuthResult {
        settle(
            CHANGE_PASSWORD_ROUTE,
            self.try_change_password(login, new_password, token).await,
        )
    }

    async fn try_login(&self, credentials: &Credentials) -> Result<AuthResult, AuthError> {
        let body = self.post(LOGIN_ROUTE, credentials).await?;
        let payload = crate::compat::decode_double_encoded(&body)?;
        let user = crate::login::user_from_payload(&payload)?;
        Ok(AuthResult::authenticated(user))
    }

    async fn try_register(&self, data: &RegistrationData) -> Result<AuthResult, AuthError> {
        let body = self.post(REGISTER_ROUTE, data).await?;
        let reply = parse_object(&body)?;

        if reply.get("status").and_then(Value::as_str) == Some(REGISTER_OK) {
            return Ok(AuthResult::ok("Cadastro realizado com sucesso."));
        }

        let message = non_empty_str(&reply, "mensagem").unwrap_or("Erro no cadastro.");
        Err(AuthError::Rejected(message.to_string()))
    }

    async fn try_request_password_reset(&self, login: &str) -> Result<AuthResult, AuthError> {
        let body = PasswordResetRequest {
            login: login.to_string(),
        };
        // Any 200 is success; the body is not inspected.
        self.post(RESET_ROUTE, &body).await?;
        Ok(AuthResult::ok("Código enviado com sucesso"))
    }

    async fn try_validate_reset_token(
        &self,
        login: &str,
        token: &str,
    ) -> Result<AuthResult, AuthError> {
        let body = ResetTokenCheck {
            login: login.to_string(),
            token: token.to_string(),
        };
        let reply = parse_object(&self.post(VALIDATE_TOKEN_ROUTE, &body).await?)?;

        if reply.get("TokenValido").and_then(Value::as_i64) == Some(1) {
            Ok(AuthResult::ok("Token validado com sucesso"))
        } else {
            Err(AuthError::Rejected("Token inválido ou expirado.".to_string()))
        }
    }

    async fn try_change_password(
        &self,
        login: &str,
        new_password: &str,
        token: &str,
    ) -> Result<AuthResult, AuthError> {
        let body = PasswordChange {
            login: login.to_string(),
            senha: new_password.to_string(),
            token: token.to_string(),
        };
        let reply = parse_object(&self.post(CHANGE_PASSWORD_ROUTE, &body).await?)?;

        match non_empty_str(&reply, "Status") {
            Some(PASSWORD_CHANGED) => Ok(AuthResult::ok("Senha alterada com sucesso")),
            Some(status) => Err(AuthError::Rejected(status.to_string())),
            None => Err(AuthError::Rejected("Erro ao alterar senha.".to_string())),
        }
    }

    /// Send one JSON `POST` and return the body of a `200` reply.
    ///
    /// The timeout covers connecting, sending and reading the body. The timer
    /// is dropped with the future as soon as the call settles.
    async fn post<B: Serialize + Sync>(&self, route: &str, body: &B) -> Result<String, AuthError> {
        let url = format!("{}{route}", self.base_url);
        tracing::debug!(%url, "auth request");

        let exchange = async {
            let response = self
                .http
                .post(&url)
                .json(body)
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status().as_u16();
            tracing::debug!(route, status, "auth response");
            if status != 200 {
                return Err(AuthError::Status(status));
            }

            response.text().await.map_err(transport_error)
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| AuthError::Timeout)?
    }
}

fn transport_error(error: reqwest::Error) -> AuthError {
    if error.is_timeout() {
        AuthError::Timeout
    } else {
        AuthError::Transport(error.to_string())
    }
}

fn parse_object(body: &str) -> Result<Value, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::InvalidResponse(e.to_string()))
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Fold an operation outcome into the public result, logging failures once.
fn settle(route: &str, outcome: Result<AuthResult, AuthError>) -> AuthResult {
    match outcome {
        Ok(result) => result,
        Err(error) => {
            tracing::warn!(route, kind = error.kind(), %error, "auth operation failed");
            AuthResult::from(error)
        }
    }
}
