use helpme_auth::{AuthSession, FileStore};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: &Commands,
    session: &mut AuthSession<FileStore>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(action, session, flags).await,
        Commands::Password { action } => commands::password::handle(action, session, flags).await,
    }
}
