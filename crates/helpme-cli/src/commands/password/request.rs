use helpme_auth::{AuthSession, FileStore};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::password::PasswordRequestArgs;
use crate::output::report;

pub async fn handle(
    args: &PasswordRequestArgs,
    session: &AuthSession<FileStore>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let login = args.login.trim();
    if login.is_empty() {
        anyhow::bail!("Por favor, digite seu usuário ou e-mail");
    }
    report(&session.request_password_reset(login).await, flags.format)
}
