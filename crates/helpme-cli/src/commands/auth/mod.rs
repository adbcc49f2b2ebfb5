mod login;
mod logout;
mod register;
mod status;

use helpme_auth::{AuthSession, FileStore};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `helpme auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    session: &mut AuthSession<FileStore>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, session, flags).await,
        AuthCommands::Logout => logout::handle(session, flags),
        AuthCommands::Status => status::handle(session, flags),
        AuthCommands::Register(args) => register::handle(args, session, flags).await,
    }
}
