use super::*;

fn complete_draft() -> SubjectDraft {
    SubjectDraft {
        subject_name: "Physics".to_owned(),
        teacher_name: "Lise Meitner".to_owned(),
        lesson: "Mechanics".to_owned(),
    }
}

#[test]
fn complete_draft_validates() {
    assert!(complete_draft().validate().is_ok());
}

#[test]
fn each_field_is_required() {
    let cases: [(&str, fn(&mut SubjectDraft)); 3] = [
        ("subjectName", |d| d.subject_name.clear()),
        ("teacherName", |d| d.teacher_name.clear()),
        ("lesson", |d| d.lesson.clear()),
    ];
    for (field, clear) in cases {
        let mut draft = complete_draft();
        clear(&mut draft);
        assert!(draft.validate().unwrap_err().get(field).is_some(), "{field}");
    }
}

#[test]
fn payload_uses_backend_field_names() {
    let json = serde_json::to_value(complete_draft().validate().unwrap()).unwrap();
    assert_eq!(json["subjectName"], "Physics");
}
