mod change;
mod recover;
mod request;
mod validate;

use helpme_auth::{AuthSession, FileStore};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PasswordCommands;

/// Handle `helpme password <subcommand>`.
pub async fn handle(
    action: &PasswordCommands,
    session: &AuthSession<FileStore>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PasswordCommands::Request(args) => request::handle(args, session, flags).await,
        PasswordCommands::Validate(args) => validate::handle(args, session, flags).await,
        PasswordCommands::Change(args) => change::handle(args, session, flags).await,
        PasswordCommands::Recover(args) => recover::handle(args, session, flags).await,
    }
}
