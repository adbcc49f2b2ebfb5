use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in and persist the session.
    Login(AuthLoginArgs),
    /// Clear the stored session.
    Logout,
    /// Show the current session.
    Status,
    /// Create a new account.
    Register(AuthRegisterArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// User name or e-mail.
    #[arg(long)]
    pub login: String,
    /// Password (falls back to `HELPME_PASSWORD`).
    #[arg(long, env = "HELPME_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    /// Full name.
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Desired user name.
    #[arg(long)]
    pub login: String,
    #[arg(long, env = "HELPME_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Company or repair shop name (defaults to the full name).
    #[arg(long)]
    pub company: Option<String>,
}
