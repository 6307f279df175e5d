use crate::core::models::Notification;

const SUBSCRIPTION_MARKER: &str = "SUBSCRIPTION_REQUEST:";
const TABLE_MARKER: &str = "TABLE_ID:";

const SUBSCRIPTION_HEADER: &str = "NEW OFFERS SUBSCRIPTION";
const FEEDBACK_HEADER: &str = "GUEST FEEDBACK";
const UNKNOWN_TABLE_LABEL: &str = "TABLE: unknown!";

/// Classify a raw message by its embedded markers.
///
/// Markers are matched case-sensitively as literal substrings; the forms that
/// produce them already ship, so this stays a substring search with
/// first-occurrence prefix removal rather than a structured parser. Priority
/// order, first match wins: subscription, table comment, generic feedback.
///
/// # Examples
///
/// ```
/// use guest_relay::relay::classify_message;
///
/// let n = classify_message("TABLE_ID: 5 | COMMENT: Great coffee");
/// assert_eq!(n.header, "GUEST FEEDBACK");
/// assert_eq!(n.table_label.as_deref(), Some("TABLE: 5"));
/// assert_eq!(n.body, "Great coffee");
///
/// let n = classify_message("SUBSCRIPTION_REQUEST: +15550100");
/// assert_eq!(n.header, "NEW OFFERS SUBSCRIPTION");
/// assert_eq!(n.table_label, None);
/// assert_eq!(n.body, "Phone: +15550100");
/// ```
#[must_use]
pub fn classify_message(message: &str) -> Notification {
    if message.contains(SUBSCRIPTION_MARKER) {
        return classify_subscription(message);
    }

    if message.contains(TABLE_MARKER) {
        return classify_table_comment(message);
    }

    Notification {
        header: FEEDBACK_HEADER.to_string(),
        table_label: Some(UNKNOWN_TABLE_LABEL.to_string()),
        body: message.to_string(),
    }
}

fn classify_subscription(message: &str) -> Notification {
    // The offers form may combine the phone number with a table marker as
    // "TABLE_ID: <id> | SUBSCRIPTION_REQUEST: <phone>"; only the phone part
    // is forwarded, and no table line appears for subscriptions.
    let relevant = if message.contains('|') {
        message
            .split('|')
            .find(|part| part.contains(SUBSCRIPTION_MARKER))
            .unwrap_or(message)
    } else {
        message
    };

    Notification {
        header: SUBSCRIPTION_HEADER.to_string(),
        table_label: None,
        body: relevant
            .replacen("SUBSCRIPTION_REQUEST: ", "Phone: ", 1)
            .trim()
            .to_string(),
    }
}

fn classify_table_comment(message: &str) -> Notification {
    // Only the first two " | "-separated fields matter; anything after a
    // second separator is dropped, matching what the forms produce.
    let mut parts = message.split(" | ");
    let table_part = parts.next().unwrap_or_default();
    let content_part = parts.next().unwrap_or_default();

    let table_id = table_part.replacen("TABLE_ID: ", "", 1).trim().to_string();

    Notification {
        header: FEEDBACK_HEADER.to_string(),
        table_label: Some(format!("TABLE: {}", table_id)),
        body: content_part.replacen("COMMENT: ", "", 1).trim().to_string(),
    }
}

/// Render a classified message into the notification text sent to Telegram.
///
/// Line order is a contract with the people reading the chats: header, blank
/// line, table label (omitted for subscriptions), name line, details line.
///
/// # Examples
///
/// ```
/// use guest_relay::relay::{classify_message, format_notification};
///
/// let n = classify_message("TABLE_ID: 5 | COMMENT: Great coffee");
/// let text = format_notification(&n, Some("Alice"));
/// assert_eq!(
///     text,
///     "GUEST FEEDBACK\n\nTABLE: 5\nName: Alice\nDetails: Great coffee"
/// );
/// ```
#[must_use]
pub fn format_notification(notification: &Notification, name: Option<&str>) -> String {
    let name = match name {
        Some(n) if !n.is_empty() => n,
        _ => "Anonymous",
    };

    let table_line = notification
        .table_label
        .as_ref()
        .map(|label| format!("{}\n", label))
        .unwrap_or_default();

    format!(
        "{}\n\n{}Name: {}\nDetails: {}",
        notification.header, table_line, name, notification.body
    )
}
