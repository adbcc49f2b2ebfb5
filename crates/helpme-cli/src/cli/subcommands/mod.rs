pub mod auth;
pub mod password;

pub use auth::AuthCommands;
pub use password::PasswordCommands;
