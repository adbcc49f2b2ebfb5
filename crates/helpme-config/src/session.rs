//! Session persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Storage key the user record is persisted under.
pub const DEFAULT_SESSION_KEY: &str = "helpme_user";

fn default_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding the session store. Empty means `~/.helpme`.
    #[serde(default)]
    pub dir: String,

    /// Key of the persisted user record.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            key: default_key(),
        }
    }
}

impl SessionConfig {
    /// Resolved store directory, or `None` when no home directory exists.
    #[must_use]
    pub fn store_dir(&self) -> Option<PathBuf> {
        if self.dir.trim().is_empty() {
            dirs::home_dir().map(|h| h.join(".helpme"))
        } else {
            Some(PathBuf::from(&self.dir))
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let key = self.key.trim();
        if key.is_empty() {
            return Err(ConfigError::invalid("session.key", "must not be empty"));
        }
        if key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(ConfigError::invalid(
                "session.key",
                "must be a plain name without path separators",
            ));
        }
        Ok(())
    }
}
