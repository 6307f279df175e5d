/// guest-relay - forwards guest submissions from a café website to Telegram.
///
/// This crate implements the serverless notification relay behind the site's
/// comment and offers-subscription forms:
/// 1. An API Lambda receives a JSON submission `{ name?, message }`
/// 2. The message is classified by its embedded markers and reformatted
/// 3. The formatted text is broadcast to every configured Telegram chat
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - reqwest for Telegram Bot API interactions
/// - Tokio for async runtime
///
/// Delivery succeeds when at least one configured chat accepts the message;
/// partial failures are logged and tolerated.
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod relay;
pub mod telegram;

pub use errors::RelayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
