use guest_relay::RelayError;
use guest_relay::core::config::{AppConfig, resolve_destinations};

/// Tests for destination-list resolution and fail-fast config validation.

#[test]
fn test_resolve_destinations_drops_blanks_and_trims() {
    let resolved = resolve_destinations("111, ,222,");

    assert_eq!(
        resolved,
        vec!["111".to_string(), "222".to_string()],
        "Blank entries are dropped, whitespace trimmed, order preserved"
    );
}

#[test]
fn test_resolve_destinations_empty_input() {
    assert!(resolve_destinations("").is_empty());
    assert!(resolve_destinations(" , ,, ").is_empty());
}

#[test]
fn test_resolve_destinations_preserves_order() {
    let resolved = resolve_destinations("-100200,42, 7 ");

    assert_eq!(
        resolved,
        vec!["-100200".to_string(), "42".to_string(), "7".to_string()]
    );
}

#[test]
fn test_validate_rejects_empty_token() {
    let config = AppConfig {
        telegram_bot_token: "  ".to_string(),
        telegram_chat_ids: vec!["111".to_string()],
    };

    assert!(matches!(
        config.validate(),
        Err(RelayError::ConfigError(_))
    ));
}

#[test]
fn test_validate_rejects_empty_destination_list() {
    let config = AppConfig {
        telegram_bot_token: "123:abc".to_string(),
        telegram_chat_ids: vec![],
    };

    match config.validate() {
        Err(RelayError::ConfigError(msg)) => {
            assert!(
                msg.contains("TELEGRAM_CHAT_ID"),
                "Error should name the missing variable"
            );
        }
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_validate_accepts_usable_config() {
    let config = AppConfig {
        telegram_bot_token: "123:abc".to_string(),
        telegram_chat_ids: vec!["111".to_string(), "222".to_string()],
    };

    assert!(config.validate().is_ok());
}
