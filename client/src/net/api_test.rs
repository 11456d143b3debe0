use super::*;

#[test]
fn status_error_carries_backend_message() {
    let err = status_error(404, r#"{"message":"not found"}"#);
    assert_eq!(err, FetchError::Http { status: 404, message: "not found".to_owned() });
}

#[test]
fn status_error_falls_back_without_message_field() {
    let err = status_error(502, "<html>bad gateway</html>");
    assert_eq!(
        err,
        FetchError::Http { status: 502, message: "request failed with status 502".to_owned() }
    );
}

#[test]
fn generic_failure_names_the_status() {
    assert_eq!(generic_failure(500), "request failed with status 500");
}
