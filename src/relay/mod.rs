//! Message classification and fan-out delivery

pub mod broadcast;
pub mod classify;

// Re-export main entry points for convenience
pub use broadcast::{MessageSink, broadcast};
pub use classify::{classify_message, format_notification};
