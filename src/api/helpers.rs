//! Common helper functions for the API handler.
//!
//! Response builders matching the shape the website's forms expect:
//! `{"success": true}` on delivery, `{"success": false, "error": ...}` on any
//! failure.

use serde_json::{Value, json};

/// Returns a 200 OK response confirming at least one delivery succeeded.
#[must_use]
pub fn ok_success() -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "success": true }).to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "success": false, "error": message }).to_string()
    })
}
