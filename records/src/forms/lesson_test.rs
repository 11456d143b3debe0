use super::*;

fn complete_draft() -> LessonDraft {
    LessonDraft {
        lesson_name: "Mechanics".to_owned(),
        day: "MONDAY".to_owned(),
        start_time: "09:00".to_owned(),
        end_time: "10:00".to_owned(),
        subject_name: "Physics".to_owned(),
        class_name: "4B".to_owned(),
        teacher_name: "Lise Meitner".to_owned(),
    }
}

#[test]
fn complete_draft_validates() {
    let payload = complete_draft().validate().expect("should validate");
    assert_eq!(payload.day, "MONDAY");
}

#[test]
fn weekend_days_are_rejected() {
    let mut draft = complete_draft();
    draft.day = "SATURDAY".to_owned();
    assert_eq!(draft.validate().unwrap_err().get("day"), Some("Day is required"));
}

#[test]
fn empty_day_is_rejected() {
    let mut draft = complete_draft();
    draft.day = String::new();
    assert_eq!(draft.validate().unwrap_err().get("day"), Some("Day is required"));
}

#[test]
fn required_fields_block_when_empty() {
    let cases: [(&str, fn(&mut LessonDraft)); 6] = [
        ("lessonName", |d| d.lesson_name.clear()),
        ("startTime", |d| d.start_time.clear()),
        ("endTime", |d| d.end_time.clear()),
        ("subjectName", |d| d.subject_name.clear()),
        ("className", |d| d.class_name.clear()),
        ("teacherName", |d| d.teacher_name.clear()),
    ];
    for (field, clear) in cases {
        let mut draft = complete_draft();
        clear(&mut draft);
        assert!(draft.validate().unwrap_err().get(field).is_some(), "{field}");
    }
}
