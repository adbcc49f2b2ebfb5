//! Owned session state: the signed-in user plus its persisted copy.
//!
//! Lifecycle:
//! - [`AuthSession::restore`] adopts the persisted record, discarding it if it
//!   does not decode.
//! - A successful [`AuthSession::login`] replaces the user and re-persists.
//! - [`AuthSession::logout`] clears both the slot and the stored record.
//!
//! Registration and password recovery go through the same client but never
//! touch the session.

use helpme_core::{AuthResult, Credentials, RegistrationData, User};

use crate::client::AuthClient;
use crate::error::StoreError;
use crate::store::SessionStore;

#[derive(Debug)]
pub struct AuthSession<S: SessionStore> {
    client: AuthClient,
    store: S,
    key: String,
    user: Option<User>,
}

impl<S: SessionStore> AuthSession<S> {
    /// Build a session, adopting the record persisted under `key` if any.
    ///
    /// A record that fails to decode is removed. A store that cannot be read
    /// is logged and treated as signed out.
    pub fn restore(client: AuthClient, mut store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let user = match store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(error) => {
                    tracing::warn!(%error, key, "discarding corrupt session record");
                    if let Err(error) = store.remove(&key) {
                        tracing::warn!(%error, "failed to remove corrupt session record");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                tracing::warn!(%error, "session store unreadable; starting signed out");
                None
            }
        };

        Self {
            client,
            store,
            key,
            user,
        }
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True when a user is present and carries a non-empty token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_authenticated)
    }

    #[must_use]
    pub const fn client(&self) -> &AuthClient {
        &self.client
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Log in and, on success, replace the current user and persist it.
    ///
    /// A persist failure is logged; the login still counts and the in-memory
    /// session is updated.
    pub async fn login(&mut self, credentials: &Credentials) -> AuthResult {
        let result = self.client.login(credentials).await;

        if let (true, Some(user)) = (result.success, result.user.as_ref()) {
            if let Err(error) = self.persist(user) {
                tracing::warn!(%error, "failed to persist session");
            }
            tracing::debug!(user_id = %user.id, "session started");
            self.user = Some(user.clone());
        }

        result
    }

    /// Clear the current user and erase the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the persisted record cannot be removed. The
    /// in-memory session is cleared regardless.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.user = None;
        self.store.remove(&self.key)
    }

    pub async fn register(&self, data: &RegistrationData) -> AuthResult {
        self.client.register(data).await
    }

    pub async fn request_password_reset(&self, login: &str) -> AuthResult {
        self.client.request_password_reset(login).await
    }

    pub async fn validate_reset_token(&self, login: &str, token: &str) -> AuthResult {
        self.client.validate_reset_token(login, token).await
    }

    pub async fn change_password(&self, login: &str, new_password: &str, token: &str) -> AuthResult {
        self.client.change_password(login, new_password, token).await
    }

    fn persist(&mut self, user: &User) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(user)?;
        self.store.set(&self.key, &encoded)
    }
}
