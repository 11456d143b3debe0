use super::*;

#[test]
fn outcome_banner_shows_success_text_on_ok() {
    let banner = Banner::from_outcome(&Ok(()), "Class created successfully!");
    assert!(banner.success);
    assert_eq!(banner.message, "Class created successfully!");
}

#[test]
fn outcome_banner_prefixes_server_message_with_error() {
    let outcome = Err(FetchError::Http { status: 404, message: "not found".to_owned() });
    let banner = Banner::from_outcome(&outcome, "unused");
    assert!(!banner.success);
    assert_eq!(banner.message, "Error: not found");
}

#[test]
fn action_banner_mirrors_result_polarity() {
    let ok = Banner::from_action(&ActionResult::ok("Exam updated successfully!"));
    assert!(ok.success);
    assert_eq!(ok.message, "Exam updated successfully!");

    let err = Banner::from_action(&ActionResult::err("not found"));
    assert!(!err.success);
    assert_eq!(err.message, "Error: not found");
}
