use std::io::{BufRead, Write};

use helpme_auth::recovery::check_new_password;
use helpme_auth::{AuthClient, AuthSession, FileStore, RecoveryFlow, RecoveryStep};
use helpme_core::AuthResult;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::password::PasswordRequestArgs;
use crate::output::report;

const RESEND: &str = "reenviar";
const BACK: &str = "voltar";
const LOGIN_PROMPT: &str = "Usuário ou e-mail: ";

pub async fn handle(
    args: &PasswordRequestArgs,
    session: &AuthSession<FileStore>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut prompts = std::io::stderr();

    let result = run_wizard(
        session.client(),
        &args.login,
        &mut input,
        &mut prompts,
        flags.quiet,
    )
    .await?;
    report(&result, flags.format)
}

/// Drive a [`RecoveryFlow`] from line-oriented input.
///
/// Prompts go to `prompts`; intermediate messages are suppressed when
/// `quiet`. The returned result is the one that ended the flow.
async fn run_wizard<R: BufRead, W: Write>(
    client: &AuthClient,
    login: &str,
    input: &mut R,
    prompts: &mut W,
    quiet: bool,
) -> anyhow::Result<AuthResult> {
    let mut flow = RecoveryFlow::new();
    let mut login = login.to_owned();
    let mut went_back = false;

    loop {
        match flow.step() {
            RecoveryStep::RequestCode => {
                let sent = flow.request_code(client, &login).await;
                if sent.success {
                    note(prompts, quiet, sent.message_or(""))?;
                } else if went_back {
                    note(prompts, quiet, sent.message_or(""))?;
                    login = ask(input, prompts, LOGIN_PROMPT)?;
                } else {
                    return Ok(sent);
                }
            }
            RecoveryStep::ValidateToken => {
                let label = format!("Código recebido ('{RESEND}' ou '{BACK}'): ");
                let answer = ask(input, prompts, &label)?;
                let result = if answer.eq_ignore_ascii_case(RESEND) {
                    flow.request_code(client, &login).await
                } else if answer.eq_ignore_ascii_case(BACK) {
                    flow.back();
                    went_back = true;
                    login = ask(input, prompts, LOGIN_PROMPT)?;
                    continue;
                } else {
                    flow.validate_token(client, &answer).await
                };
                note(prompts, quiet, result.message_or(""))?;
            }
            RecoveryStep::NewPassword => {
                let password = ask(input, prompts, "Nova senha: ")?;
                let confirmation = ask(input, prompts, "Confirme a nova senha: ")?;
                let local = check_new_password(&password, &confirmation);
                let result = flow.change_password(client, &password, &confirmation).await;
                // Local rule failures re-prompt; a server answer ends the flow.
                if local.is_ok() {
                    return Ok(result);
                }
                note(prompts, quiet, result.message_or(""))?;
            }
            RecoveryStep::Done => return Ok(AuthResult::ok("Senha alterada com sucesso")),
        }
    }
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    label: &str,
) -> anyhow::Result<String> {
    write!(prompts, "{label}")?;
    prompts.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("entrada encerrada antes do fim da recuperação de senha");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn note<W: Write>(prompts: &mut W, quiet: bool, message: &str) -> anyhow::Result<()> {
    if !quiet && !message.is_empty() {
        writeln!(prompts, "{message}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::thread::JoinHandle;
    use std::time::Duration;

    use serde_json::{Value, json};

    use super::*;

    /// Answer `replies` in order with status 200, returning the request bodies.
    fn mock(replies: Vec<Value>) -> (AuthClient, JoinHandle<Vec<Value>>) {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock server");
        let port = server.server_addr().to_ip().expect("ip address").port();

        let handle = std::thread::spawn(move || {
            let mut seen = Vec::new();
            for reply in replies {
                let Ok(Some(mut request)) = server.recv_timeout(Duration::from_secs(10)) else {
                    break;
                };
                let mut raw = String::new();
                let _ = request.as_reader().read_to_string(&mut raw);
                seen.push(serde_json::from_str(&raw).unwrap_or(Value::Null));
                let _ = request.respond(tiny_http::Response::from_string(reply.to_string()));
            }
            seen
        });

        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("http client");
        let client = AuthClient::with_http(
            http,
            format!("http://127.0.0.1:{port}"),
            Duration::from_secs(5),
        );
        (client, handle)
    }

    #[tokio::test]
    async fn walks_all_steps() {
        let (client, server) = mock(vec![
            json!({}),
            json!({"TokenValido": 1}),
            json!({"Status": "Senha Alterada"}),
        ]);
        let mut input = Cursor::new("123456\nnovasenha\nnovasenha\n");
        let mut prompts = Vec::new();

        let result = run_wizard(&client, " joao ", &mut input, &mut prompts, false)
            .await
            .expect("wizard");

        assert!(result.success);
        assert_eq!(result.message.as_deref(), Some("Senha alterada com sucesso"));
        let bodies = server.join().expect("server thread");
        assert_eq!(bodies[0], json!({"login": "joao"}));
        assert_eq!(bodies[1], json!({"login": "joao", "token": "123456"}));
        assert_eq!(
            bodies[2],
            json!({"login": "joao", "senha": "novasenha", "token": "123456"})
        );
        let shown = String::from_utf8(prompts).expect("utf8");
        assert!(shown.contains("Código enviado com sucesso"));
    }

    #[tokio::test]
    async fn mismatched_confirmation_prompts_again_without_a_request() {
        let (client, server) = mock(vec![
            json!({}),
            json!({"TokenValido": 1}),
            json!({"Status": "Senha Alterada"}),
        ]);
        let mut input = Cursor::new("123456\nnovasenha\noutra\nnovasenha\nnovasenha\n");
        let mut prompts = Vec::new();

        let result = run_wizard(&client, "joao", &mut input, &mut prompts, false)
            .await
            .expect("wizard");

        assert!(result.success);
        assert_eq!(server.join().expect("server thread").len(), 3);
        let shown = String::from_utf8(prompts).expect("utf8");
        assert!(shown.contains("As senhas não coincidem"));
    }

    #[tokio::test]
    async fn resend_asks_for_another_code() {
        let (client, server) = mock(vec![
            json!({}),
            json!({}),
            json!({"TokenValido": 1}),
            json!({"Status": "Senha Alterada"}),
        ]);
        let mut input = Cursor::new("REENVIAR\n654321\nnovasenha\nnovasenha\n");
        let mut prompts = Vec::new();

        let result = run_wizard(&client, "joao", &mut input, &mut prompts, true)
            .await
            .expect("wizard");

        assert!(result.success);
        let bodies = server.join().expect("server thread");
        assert_eq!(bodies[1], json!({"login": "joao"}));
        assert_eq!(bodies[2], json!({"login": "joao", "token": "654321"}));
    }

    #[tokio::test]
    async fn back_lets_the_user_pick_another_login() {
        let (client, server) = mock(vec![
            json!({}),
            json!({}),
            json!({"TokenValido": 1}),
            json!({"Status": "Senha Alterada"}),
        ]);
        let mut input = Cursor::new("voltar\nmaria\n111111\nnovasenha\nnovasenha\n");
        let mut prompts = Vec::new();

        let result = run_wizard(&client, "joao", &mut input, &mut prompts, false)
            .await
            .expect("wizard");

        assert!(result.success);
        let bodies = server.join().expect("server thread");
        assert_eq!(bodies[0], json!({"login": "joao"}));
        assert_eq!(bodies[1], json!({"login": "maria"}));
        assert_eq!(bodies[2], json!({"login": "maria", "token": "111111"}));
        assert_eq!(
            bodies[3],
            json!({"login": "maria", "senha": "novasenha", "token": "111111"})
        );
    }

    #[tokio::test]
    async fn blank_login_after_back_asks_again() {
        let (client, server) = mock(vec![
            json!({}),
            json!({}),
            json!({"TokenValido": 1}),
            json!({"Status": "Senha Alterada"}),
        ]);
        let mut input = Cursor::new("voltar\n  \nmaria\n111111\nnovasenha\nnovasenha\n");
        let mut prompts = Vec::new();

        let result = run_wizard(&client, "joao", &mut input, &mut prompts, false)
            .await
            .expect("wizard");

        assert!(result.success);
        let bodies = server.join().expect("server thread");
        assert_eq!(bodies.len(), 4);
        assert_eq!(bodies[1], json!({"login": "maria"}));
        let shown = String::from_utf8(prompts).expect("utf8");
        assert!(shown.contains("Por favor, digite seu usuário ou e-mail"));
        assert_eq!(shown.matches(LOGIN_PROMPT).count(), 2);
    }

    #[tokio::test]
    async fn input_ending_early_is_an_error() {
        let (client, server) = mock(vec![json!({})]);
        let mut input = Cursor::new("");
        let mut prompts = Vec::new();

        let err = run_wizard(&client, "joao", &mut input, &mut prompts, false)
            .await
            .expect_err("eof before code");

        assert!(err.to_string().contains("entrada encerrada"));
        assert_eq!(server.join().expect("server thread").len(), 1);
    }
}
