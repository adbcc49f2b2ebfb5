use helpme_auth::recovery::MIN_PASSWORD_CHARS;
use helpme_auth::{AuthSession, FileStore};
use helpme_core::RegistrationData;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::output::report;

pub async fn handle(
    args: &AuthRegisterArgs,
    session: &AuthSession<FileStore>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    check_inputs(args)?;

    let data = RegistrationData::new(
        &args.name,
        &args.email,
        &args.login,
        &args.password,
        args.company.clone(),
    );
    let result = session.register(&data).await;
    report(&result, flags.format)
}

fn check_inputs(args: &AuthRegisterArgs) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        anyhow::bail!("Por favor, digite seu nome");
    }
    if args.email.trim().is_empty() {
        anyhow::bail!("Por favor, digite seu e-mail");
    }
    if args.login.trim().is_empty() {
        anyhow::bail!("Por favor, escolha um nome de usuário");
    }
    if args.password.chars().count() < MIN_PASSWORD_CHARS {
        anyhow::bail!("A senha deve ter pelo menos 6 caracteres");
    }
    Ok(())
}
