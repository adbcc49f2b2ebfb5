use helpme_auth::{AuthSession, FileStore};
use helpme_core::Credentials;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::{output, report};

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    name: String,
    email: String,
    roles: Vec<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    session: &mut AuthSession<FileStore>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = args.password.as_deref().unwrap_or_default();
    check_inputs(&args.login, password)?;

    let result = session.login(&Credentials::new(&args.login, password)).await;
    let Some(user) = result.user.as_ref().filter(|_| result.success) else {
        return report(&result, flags.format);
    };

    output(
        &AuthLoginResponse {
            authenticated: user.is_authenticated(),
            user_id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            roles: user.roles.clone(),
        },
        flags.format,
    )
}

fn check_inputs(login: &str, password: &str) -> anyhow::Result<()> {
    if login.trim().is_empty() {
        anyhow::bail!("Por favor, digite seu usuário");
    }
    if password.trim().is_empty() {
        anyhow::bail!("Por favor, digite sua senha");
    }
    Ok(())
}
