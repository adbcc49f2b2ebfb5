use helpme_auth::{AuthSession, FileStore};
use helpme_core::User;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    login: Option<String>,
    company: Option<String>,
    roles: Vec<String>,
    store_dir: String,
}

impl AuthStatusResponse {
    fn new(user: Option<&User>, store_dir: String) -> Self {
        Self {
            authenticated: user.is_some_and(User::is_authenticated),
            user_id: user.map(|u| u.id.clone()),
            name: user.map(|u| u.name.clone()),
            email: user.map(|u| u.email.clone()),
            login: user.and_then(|u| u.login.clone()),
            company: user.and_then(|u| u.company.clone()),
            roles: user.map(|u| u.roles.clone()).unwrap_or_default(),
            store_dir,
        }
    }
}

pub fn handle(session: &AuthSession<FileStore>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store_dir = session.store().dir().display().to_string();
    output(&AuthStatusResponse::new(session.user(), store_dir), flags.format)
}
