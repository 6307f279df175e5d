use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid relay configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse submission: {0}")]
    ParseError(String),

    #[error("Failed to access Telegram API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("All deliveries failed: {0}")]
    DeliveryError(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for RelayError {
    fn from(error: anyhow::Error) -> Self {
        RelayError::ApiError(error.to_string())
    }
}
