//! # helpme-core
//!
//! Core types for the Help.Me auth client.
//!
//! This crate provides the data shared across the workspace:
//! - [`User`], the authenticated session record persisted between runs
//! - [`AuthResult`], the uniform envelope returned by every auth operation
//! - Request payloads serialized with the remote API's wire field names

pub mod requests;
pub mod result;
pub mod user;

pub use requests::{
    Credentials, PasswordChange, PasswordResetRequest, RegistrationData, ResetTokenCheck,
};
pub use result::AuthResult;
pub use user::{DEFAULT_ROLE, User};
