use super::*;

fn complete_draft() -> ClassDraft {
    ClassDraft {
        class_name: "4B".to_owned(),
        capacity: "25".to_owned(),
        teacher_name: "Marie Curie".to_owned(),
        level: "4".to_owned(),
    }
}

#[test]
fn complete_draft_validates_and_coerces_capacity() {
    let payload = complete_draft().validate().expect("should validate");
    assert_eq!(payload.capacity, 25);
}

#[test]
fn negative_capacity_fails_with_literal_message() {
    let mut draft = complete_draft();
    draft.capacity = "-5".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("capacity"), Some("Capacity must be at least 1"));
}

#[test]
fn empty_capacity_fails_with_literal_message() {
    let mut draft = complete_draft();
    draft.capacity = String::new();
    assert_eq!(
        draft.validate().unwrap_err().get("capacity"),
        Some("Capacity must be at least 1")
    );
}

#[test]
fn non_numeric_capacity_reports_number_message() {
    let mut draft = complete_draft();
    draft.capacity = "lots".to_owned();
    assert_eq!(
        draft.validate().unwrap_err().get("capacity"),
        Some("Capacity must be a valid number")
    );
}

#[test]
fn required_fields_block_when_empty() {
    let cases: [(&str, fn(&mut ClassDraft)); 3] = [
        ("className", |d| d.class_name.clear()),
        ("teacherName", |d| d.teacher_name.clear()),
        ("level", |d| d.level.clear()),
    ];
    for (field, clear) in cases {
        let mut draft = complete_draft();
        clear(&mut draft);
        assert!(draft.validate().unwrap_err().get(field).is_some(), "{field}");
    }
}

#[test]
fn payload_serializes_with_backend_field_names() {
    let json = serde_json::to_value(complete_draft().validate().unwrap()).unwrap();
    assert_eq!(json["className"], "4B");
    assert_eq!(json["capacity"], 25);
    assert_eq!(json["teacherName"], "Marie Curie");
}
