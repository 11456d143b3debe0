use super::*;

fn complete_draft() -> AssignmentDraft {
    AssignmentDraft {
        assignment_title: "Essay draft".to_owned(),
        start_date: "2025-04-01".to_owned(),
        due_date: "2025-04-15".to_owned(),
        lesson_name: "Literature".to_owned(),
    }
}

#[test]
fn complete_draft_validates() {
    assert!(complete_draft().validate().is_ok());
}

#[test]
fn every_field_is_required() {
    let cases: [(&str, fn(&mut AssignmentDraft)); 4] = [
        ("assignmentTitle", |d| d.assignment_title.clear()),
        ("startDate", |d| d.start_date.clear()),
        ("dueDate", |d| d.due_date.clear()),
        ("lessonName", |d| d.lesson_name.clear()),
    ];
    for (field, clear) in cases {
        let mut draft = complete_draft();
        clear(&mut draft);
        assert!(draft.validate().unwrap_err().get(field).is_some(), "{field}");
    }
}
