use super::*;

#[test]
fn numeric_level_validates() {
    let payload = GradeDraft { level: "4".to_owned() }.validate().unwrap();
    assert_eq!(payload.level, 4);
}

#[test]
fn empty_level_is_required() {
    let errors = GradeDraft { level: "  ".to_owned() }.validate().unwrap_err();
    assert_eq!(errors.get("level"), Some("Level is required"));
}

#[test]
fn non_numeric_level_reports_number_message() {
    let errors = GradeDraft { level: "senior".to_owned() }.validate().unwrap_err();
    assert_eq!(errors.get("level"), Some("Level must be a number"));
}
