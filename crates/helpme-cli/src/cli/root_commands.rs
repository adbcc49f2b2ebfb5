use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, PasswordCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out, register, show session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Password recovery.
    Password {
        #[command(subcommand)]
        action: PasswordCommands,
    },
}
