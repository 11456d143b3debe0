use super::*;

fn complete_draft() -> ExamDraft {
    ExamDraft {
        exam_title: "Midterm Algebra".to_owned(),
        start_time: "2025-03-01T09:00".to_owned(),
        end_time: "2025-03-01T11:00".to_owned(),
        lesson_name: "Algebra".to_owned(),
        score: "100".to_owned(),
    }
}

#[test]
fn complete_draft_validates() {
    assert!(complete_draft().validate().is_ok());
}

#[test]
fn every_field_is_required() {
    let cases: [(&str, fn(&mut ExamDraft)); 5] = [
        ("examTitle", |d| d.exam_title.clear()),
        ("startTime", |d| d.start_time.clear()),
        ("endTime", |d| d.end_time.clear()),
        ("lessonName", |d| d.lesson_name.clear()),
        ("score", |d| d.score.clear()),
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
    assert_eq!(json["examTitle"], "Midterm Algebra");
    assert_eq!(json["lessonName"], "Algebra");
}
