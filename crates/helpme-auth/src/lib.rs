//! # helpme-auth
//!
//! Authentication client for the Help.Me backend.
//!
//! Provides the five REST operations (login, registration, and the three
//! password-recovery calls) behind [`AuthClient`], a pluggable
//! [`SessionStore`] for persisting the signed-in user, the owned
//! [`AuthSession`] holder, and the [`RecoveryFlow`] wizard.
//!
//! Every operation returns an [`AuthResult`](helpme_core::AuthResult). Transport
//! failures, timeouts, HTTP errors and server-side rejections are all folded
//! into a failed result with a message that can be shown to the user as-is.

pub mod client;
pub mod compat;
pub mod error;
mod login;
pub mod recovery;
pub mod session;
pub mod store;

pub use client::AuthClient;
pub use error::{AuthError, StoreError};
pub use recovery::{RecoveryFlow, RecoveryStep};
pub use session::AuthSession;
pub use store::{FileStore, MemoryStore, SessionStore};
