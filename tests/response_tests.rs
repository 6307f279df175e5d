use guest_relay::api::helpers::{err_response, ok_success};

/// Tests for the Lambda response builders. The website's forms key off the
/// `success` boolean, so the body shape is part of the contract.

#[test]
fn test_ok_success_shape() {
    let response = ok_success();

    assert_eq!(response["statusCode"], 200);

    let body: serde_json::Value =
        serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["success"], true);
    assert!(
        body.get("error").is_none(),
        "Success responses should carry no error field"
    );
}

#[test]
fn test_err_response_shape() {
    let response = err_response(500, "All deliveries failed: total failure");

    assert_eq!(response["statusCode"], 500);

    let body: serde_json::Value =
        serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "All deliveries failed: total failure");
}

#[test]
fn test_err_response_preserves_status_code() {
    let response = err_response(400, "Missing body");

    assert_eq!(response["statusCode"], 400);
}
