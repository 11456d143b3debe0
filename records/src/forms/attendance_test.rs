use super::*;

fn complete_draft() -> AttendanceDraft {
    AttendanceDraft {
        date: "2025-02-14".to_owned(),
        present: Some(true),
        student_name: "Ada".to_owned(),
        lesson_name: "Algebra".to_owned(),
    }
}

#[test]
fn complete_draft_validates() {
    let payload = complete_draft().validate().expect("should validate");
    assert!(payload.present);
}

#[test]
fn unset_presence_blocks_submission() {
    let mut draft = complete_draft();
    draft.present = None;
    assert_eq!(
        draft.validate().unwrap_err().get("present"),
        Some("Presence status is required")
    );
}

#[test]
fn explicit_absent_is_valid() {
    let mut draft = complete_draft();
    draft.present = Some(false);
    assert!(!draft.validate().unwrap().present);
}

#[test]
fn text_fields_are_required() {
    let cases: [(&str, fn(&mut AttendanceDraft)); 3] = [
        ("date", |d| d.date.clear()),
        ("studentName", |d| d.student_name.clear()),
        ("lessonName", |d| d.lesson_name.clear()),
    ];
    for (field, clear) in cases {
        let mut draft = complete_draft();
        clear(&mut draft);
        assert!(draft.validate().unwrap_err().get(field).is_some(), "{field}");
    }
}
