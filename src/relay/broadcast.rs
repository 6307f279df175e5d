use async_trait::async_trait;
use futures::future::join_all;
use tracing::{info, warn};

use crate::core::models::DeliverySummary;
use crate::errors::RelayError;

/// Anything that can deliver a notification text to one destination.
///
/// The Telegram client implements this; tests substitute a recording mock.
#[async_trait]
pub trait MessageSink {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), RelayError>;
}

/// Send `text` to every destination concurrently and report the aggregate.
///
/// Each delivery is one independent attempt with no retry; a destination's
/// failure never blocks another's attempt. Partial success counts as overall
/// success.
///
/// # Errors
///
/// Returns `RelayError::ConfigError` when `destinations` is empty (checked
/// before any network call) and `RelayError::DeliveryError` when every
/// attempt failed.
pub async fn broadcast<S: MessageSink + Sync>(
    sink: &S,
    destinations: &[String],
    text: &str,
) -> Result<DeliverySummary, RelayError> {
    if destinations.is_empty() {
        return Err(RelayError::ConfigError(
            "no destination chat ids configured".to_string(),
        ));
    }

    let attempts = destinations
        .iter()
        .map(|chat_id| async move { (chat_id.as_str(), sink.send_message(chat_id, text).await) });
    let outcomes = join_all(attempts).await;

    let mut accepted = 0;
    for (chat_id, outcome) in outcomes {
        match outcome {
            Ok(()) => accepted += 1,
            Err(e) => warn!("Delivery to chat {} failed: {}", chat_id, e),
        }
    }

    let summary = DeliverySummary {
        attempted: destinations.len(),
        accepted,
    };

    if !summary.any_accepted() {
        return Err(RelayError::DeliveryError(format!(
            "all {} destinations rejected the message",
            summary.attempted
        )));
    }

    info!(
        "Delivered notification to {}/{} destinations",
        summary.accepted, summary.attempted
    );
    Ok(summary)
}
