use helpme_auth::recovery::check_new_password;
use helpme_auth::{AuthSession, FileStore};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::password::PasswordChangeArgs;
use crate::output::report;

pub async fn handle(
    args: &PasswordChangeArgs,
    session: &AuthSession<FileStore>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    check_new_password(&args.password, &args.password).map_err(anyhow::Error::msg)?;

    let result = session
        .change_password(args.login.trim(), &args.password, args.token.trim())
        .await;
    report(&result, flags.format)
}
