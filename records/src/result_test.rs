use super::*;

#[test]
fn http_error_banner_uses_server_message() {
    let err = FetchError::Http { status: 404, message: "not found".to_owned() };
    assert_eq!(err.banner_message(), "Error: not found");
}

#[test]
fn validation_banner_is_the_rule_message_verbatim() {
    let err = FetchError::Validation("Capacity must be at least 1".to_owned());
    assert_eq!(err.banner_message(), "Capacity must be at least 1");
}

#[test]
fn action_result_from_http_error_is_failure_with_message() {
    let result: ActionResult =
        FetchError::Http { status: 500, message: "boom".to_owned() }.into();
    assert_eq!(result, ActionResult::err("boom"));
}

#[test]
fn action_result_serializes_to_success_message_shape() {
    let json = serde_json::to_value(ActionResult::ok("Exam updated successfully!")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "success": true, "message": "Exam updated successfully!" })
    );
}

#[test]
fn error_message_from_body_reads_message_field() {
    assert_eq!(
        error_message_from_body(r#"{"message":"not found"}"#, "Failed"),
        "not found"
    );
}

#[test]
fn error_message_from_body_falls_back_on_junk() {
    assert_eq!(error_message_from_body("<html>502</html>", "Failed to delete exam"), "Failed to delete exam");
    assert_eq!(error_message_from_body("", "Failed to delete exam"), "Failed to delete exam");
    assert_eq!(error_message_from_body(r#"{"error":"x"}"#, "Failed"), "Failed");
}
