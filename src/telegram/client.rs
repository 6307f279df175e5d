//! Telegram Bot API client
//!
//! Encapsulates the `sendMessage` call used to deliver notifications.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::errors::RelayError;
use crate::relay::broadcast::MessageSink;

// One shared client per process; Telegram calls share its fixed timeout so a
// stalled destination cannot hold a request open past it.
static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| Client::new())
});

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram Bot API client bound to one bot token.
pub struct TelegramClient {
    api_base: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new(bot_token: &str) -> Self {
        Self {
            api_base: format!("https://api.telegram.org/bot{}", bot_token),
        }
    }
}

#[async_trait]
impl MessageSink for TelegramClient {
    /// Send one `sendMessage` request for `chat_id`.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::HttpError` when the transport fails and
    /// `RelayError::ApiError` when Telegram answers with a non-success status
    /// or `ok: false`.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), RelayError> {
        let url = format!("{}/sendMessage", self.api_base);
        let payload = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        let resp = HTTP_CLIENT.post(&url).json(&payload).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(RelayError::ApiError(format!(
                "sendMessage returned status {}: {}",
                status, body_text
            )));
        }

        let body: SendMessageResponse = resp
            .json()
            .await
            .map_err(|e| RelayError::ApiError(format!("invalid sendMessage response: {}", e)))?;

        if !body.ok {
            return Err(RelayError::ApiError(format!(
                "sendMessage rejected: {}",
                body.description.unwrap_or_else(|| "unknown error".to_string())
            )));
        }

        Ok(())
    }
}
