use std::env;

use crate::errors::RelayError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub telegram_chat_ids: Vec<String>,
}

impl AppConfig {
    /// Read the relay configuration from the environment.
    ///
    /// `TELEGRAM_CHAT_ID` holds a comma-separated list of chat ids; blank
    /// entries are dropped here so downstream code only ever sees usable
    /// destinations.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::ConfigError` when `TELEGRAM_BOT_TOKEN` is missing.
    pub fn from_env() -> Result<Self, RelayError> {
        let telegram_bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|e| RelayError::ConfigError(format!("TELEGRAM_BOT_TOKEN: {}", e)))?;
        let chat_ids_raw = env::var("TELEGRAM_CHAT_ID").unwrap_or_default();

        Ok(Self {
            telegram_bot_token,
            telegram_chat_ids: resolve_destinations(&chat_ids_raw),
        })
    }

    /// Fail fast before any network call when the credential or the
    /// destination set is unusable.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::ConfigError` when the bot token is empty or no
    /// destination chat ids are configured.
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.telegram_bot_token.trim().is_empty() {
            return Err(RelayError::ConfigError(
                "TELEGRAM_BOT_TOKEN is empty".to_string(),
            ));
        }
        if self.telegram_chat_ids.is_empty() {
            return Err(RelayError::ConfigError(
                "TELEGRAM_CHAT_ID resolved to an empty destination list".to_string(),
            ));
        }
        Ok(())
    }
}

/// Split a comma-separated destination list into an ordered set of chat ids.
///
/// Whitespace around each entry is trimmed; empty and whitespace-only entries
/// are discarded. Order is preserved.
#[must_use]
pub fn resolve_destinations(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}
