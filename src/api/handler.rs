//! API Lambda handler - validates the submission and runs the relay.
//!
//! This module handles:
//! - Request validation (body presence and JSON shape)
//! - Classification and formatting of the guest message
//! - Concurrent broadcast to every configured Telegram chat

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::models::Submission;
use crate::errors::RelayError;
use crate::relay::{broadcast, classify_message, format_notification};
use crate::telegram::TelegramClient;

pub use self::function_handler as handler;

/// Lambda handler for the relay endpoint.
///
/// Accepts a JSON body `{ name?, message }`, forwards the formatted
/// notification to the configured Telegram chats, and reports success when at
/// least one chat accepted it. Every failure, expected or not, maps to a
/// `{"success": false}` response; a bad request never takes the process down.
///
/// # Errors
///
/// Never returns `Err` for request-level failures; those become 500 response
/// payloads so the Lambda runtime does not retry them.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
) -> Result<impl Serialize, Error> {
    let correlation_id = Uuid::new_v4().to_string();
    info!(corr_id = %correlation_id, "Relay received request");

    let config = match AppConfig::from_env().and_then(|c| c.validate().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            error!(corr_id = %correlation_id, "Config error: {}", e);
            return Ok(helpers::err_response(500, &e.to_string()));
        }
    };

    let submission = match parse_submission(&event.payload) {
        Ok(s) => s,
        Err(e) => {
            error!(corr_id = %correlation_id, "Bad request: {}", e);
            return Ok(helpers::err_response(500, &e.to_string()));
        }
    };

    let notification = classify_message(&submission.message);
    let text = format_notification(&notification, submission.name.as_deref());
    info!(
        corr_id = %correlation_id,
        header = %notification.header,
        destinations = config.telegram_chat_ids.len(),
        "Broadcasting notification"
    );

    let client = TelegramClient::new(&config.telegram_bot_token);
    match broadcast(&client, &config.telegram_chat_ids, &text).await {
        Ok(summary) => {
            info!(
                corr_id = %correlation_id,
                accepted = summary.accepted,
                attempted = summary.attempted,
                "Relay succeeded"
            );
            Ok(helpers::ok_success())
        }
        Err(e) => {
            error!(corr_id = %correlation_id, "Relay failed: {}", e);
            Ok(helpers::err_response(500, &e.to_string()))
        }
    }
}

/// Pull the JSON submission out of the proxy event.
///
/// Accepts both a stringified `body` (API Gateway proxy shape) and a direct
/// JSON object payload (local invocation).
fn parse_submission(payload: &Value) -> Result<Submission, RelayError> {
    match payload.get("body") {
        Some(body) => {
            let body_str = body
                .as_str()
                .ok_or_else(|| RelayError::ParseError("body is not a string".to_string()))?;
            serde_json::from_str(body_str)
                .map_err(|e| RelayError::ParseError(format!("invalid JSON body: {}", e)))
        }
        None => serde_json::from_value(payload.clone())
            .map_err(|e| RelayError::ParseError(format!("missing body: {}", e))),
    }
}
