use serde::Deserialize;

/// A guest submission as posted by the website forms.
///
/// The `message` field is free-form text; the comment and offers pages embed
/// literal markers (`TABLE_ID:`, `SUBSCRIPTION_REQUEST:`) in it to signal
/// structured intent. Nothing here is persisted past the response.
#[derive(Debug, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub name: Option<String>,
    pub message: String,
}

/// A classified submission, derived deterministically from the message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub header: String,
    /// `None` for subscriptions; the table line is omitted from the output.
    pub table_label: Option<String>,
    pub body: String,
}

/// Per-request delivery outcome across all destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliverySummary {
    pub attempted: usize,
    pub accepted: usize,
}

impl DeliverySummary {
    #[must_use]
    pub fn any_accepted(&self) -> bool {
        self.accepted > 0
    }
}
