use helpme_auth::{AuthSession, FileStore};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::password::PasswordValidateArgs;
use crate::output::report;

pub async fn handle(
    args: &PasswordValidateArgs,
    session: &AuthSession<FileStore>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let token = args.token.trim();
    if token.is_empty() {
        anyhow::bail!("Por favor, digite o código recebido");
    }
    let result = session.validate_reset_token(args.login.trim(), token).await;
    report(&result, flags.format)
}
