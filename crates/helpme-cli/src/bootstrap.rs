use anyhow::Context;
use helpme_auth::{AuthClient, AuthSession, FileStore};
use helpme_config::HelpMeConfig;

/// Load and validate configuration (`.env`, TOML files, `HELPME_*`).
pub fn load_config() -> anyhow::Result<HelpMeConfig> {
    let config = HelpMeConfig::load_with_dotenv().context("failed to load helpme configuration")?;
    config.validate()?;
    tracing::debug!(base_url = %config.api.base_url, timeout_secs = config.api.timeout_secs, "config loaded");
    Ok(config)
}

/// Restore the persisted session from the configured store directory.
pub fn open_session(config: &HelpMeConfig) -> anyhow::Result<AuthSession<FileStore>> {
    let dir = config
        .session
        .store_dir()
        .context("home directory not found; set HELPME_SESSION__DIR")?;

    let client = AuthClient::from_config(&config.api);
    Ok(AuthSession::restore(
        client,
        FileStore::new(dir),
        &config.session.key,
    ))
}
