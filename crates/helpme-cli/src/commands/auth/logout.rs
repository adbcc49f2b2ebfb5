use helpme_auth::{AuthSession, FileStore};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(session: &mut AuthSession<FileStore>, flags: &GlobalFlags) -> anyhow::Result<()> {
    session.logout()?;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
