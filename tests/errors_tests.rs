use std::error::Error;

use guest_relay::RelayError;

#[test]
fn test_relay_error_implements_error_trait() {
    // Verify RelayError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = RelayError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_relay_error_display() {
    // Verify Display implementation works correctly
    let error = RelayError::ConfigError("TELEGRAM_BOT_TOKEN is empty".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid relay configuration: TELEGRAM_BOT_TOKEN is empty"
    );

    let error = RelayError::ApiError("chat not found".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access Telegram API: chat not found"
    );

    let error = RelayError::DeliveryError("all 2 destinations rejected the message".to_string());
    assert_eq!(
        format!("{error}"),
        "All deliveries failed: all 2 destinations rejected the message"
    );
}

#[test]
fn test_relay_error_from_anyhow() {
    let err = anyhow::anyhow!("test error");
    let relay_err: RelayError = err.into();

    match relay_err {
        RelayError::ApiError(msg) => assert!(msg.contains("test error")),
        _ => panic!("Unexpected error type"),
    }
}

#[test]
fn test_config_and_delivery_errors_are_distinguishable() {
    // The handler maps both to a 500 response, but the error text must tell
    // the caller which kind of failure happened.
    let config = RelayError::ConfigError("x".to_string());
    let delivery = RelayError::DeliveryError("x".to_string());

    assert_ne!(format!("{config}"), format!("{delivery}"));
}
