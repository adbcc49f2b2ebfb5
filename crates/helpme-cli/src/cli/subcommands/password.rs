use clap::{Args, Subcommand};

/// Password recovery commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PasswordCommands {
    /// Ask the server to e-mail a recovery code.
    Request(PasswordRequestArgs),
    /// Check a recovery code.
    Validate(PasswordValidateArgs),
    /// Set a new password with a validated code.
    Change(PasswordChangeArgs),
    /// Interactive recovery: request, validate and change in one go.
    Recover(PasswordRequestArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PasswordRequestArgs {
    /// User name or e-mail.
    #[arg(long)]
    pub login: String,
}

#[derive(Clone, Debug, Args)]
pub struct PasswordValidateArgs {
    #[arg(long)]
    pub login: String,
    /// Code received by e-mail.
    #[arg(long)]
    pub token: String,
}

#[derive(Clone, Debug, Args)]
pub struct PasswordChangeArgs {
    #[arg(long)]
    pub login: String,
    /// Code received by e-mail.
    #[arg(long)]
    pub token: String,
    /// New password.
    #[arg(long, env = "HELPME_NEW_PASSWORD", hide_env_values = true)]
    pub password: String,
}
