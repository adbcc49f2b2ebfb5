//! Password-recovery wizard.
//!
//! Four linear steps: request a code for a login, validate the code the user
//! received, choose a new password, done. Local checks run before any request
//! is sent; a failed server result leaves the wizard on the same step.

use helpme_core::AuthResult;

use crate::client::AuthClient;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

const WRONG_STEP: &str = "Etapa inválida para esta operação";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStep {
    RequestCode,
    ValidateToken,
    NewPassword,
    Done,
}

#[derive(Debug, Clone)]
pub struct RecoveryFlow {
    step: RecoveryStep,
    login: String,
    token: String,
}

impl Default for RecoveryFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryFlow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: RecoveryStep::RequestCode,
            login: String::new(),
            token: String::new(),
        }
    }

    #[must_use]
    pub const fn step(&self) -> RecoveryStep {
        self.step
    }

    /// Login the code was requested for; empty before the first request.
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.step == RecoveryStep::Done
    }

    /// Ask the server to send a recovery code.
    ///
    /// Valid on the first step, and again while waiting for the code (resend).
    pub async fn request_code(&mut self, client: &AuthClient, login: &str) -> AuthResult {
        if !matches!(
            self.step,
            RecoveryStep::RequestCode | RecoveryStep::ValidateToken
        ) {
            return AuthResult::failure(WRONG_STEP);
        }
        let login = login.trim();
        if login.is_empty() {
            return AuthResult::failure("Por favor, digite seu usuário ou e-mail");
        }

        let result = client.request_password_reset(login).await;
        if result.success {
            login.clone_into(&mut self.login);
            self.step = RecoveryStep::ValidateToken;
        }
        result
    }

    /// Check the code the user received.
    pub async fn validate_token(&mut self, client: &AuthClient, token: &str) -> AuthResult {
        if self.step != RecoveryStep::ValidateToken {
            return AuthResult::failure(WRONG_STEP);
        }
        let token = token.trim();
        if token.is_empty() {
            return AuthResult::failure("Por favor, digite o código recebido");
        }

        let result = client.validate_reset_token(&self.login, token).await;
        if result.success {
            token.clone_into(&mut self.token);
            self.step = RecoveryStep::NewPassword;
        }
        result
    }

    /// Set the new password using the validated code.
    pub async fn change_password(
        &mut self,
        client: &AuthClient,
        new_password: &str,
        confirmation: &str,
    ) -> AuthResult {
        if self.step != RecoveryStep::NewPassword {
            return AuthResult::failure(WRONG_STEP);
        }
        if let Err(message) = check_new_password(new_password, confirmation) {
            return AuthResult::failure(message);
        }

        let result = client
            .change_password(&self.login, new_password, &self.token)
            .await;
        if result.success {
            self.step = RecoveryStep::Done;
        }
        result
    }

    /// Go back from code entry to the login step.
    pub fn back(&mut self) {
        if self.step == RecoveryStep::ValidateToken {
            self.step = RecoveryStep::RequestCode;
        }
    }
}

/// Local password rules applied before contacting the server.
///
/// # Errors
///
/// Returns the user-facing message for the first rule that fails.
pub fn check_new_password(new_password: &str, confirmation: &str) -> Result<(), &'static str> {
    if new_password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("A senha deve ter pelo menos 6 caracteres");
    }
    if new_password != confirmation {
        return Err("As senhas não coincidem");
    }
    Ok(())
}
