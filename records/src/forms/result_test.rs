use super::*;

fn complete_draft() -> ResultDraft {
    ResultDraft {
        score: "87.5".to_owned(),
        exam_title: "Midterm Algebra".to_owned(),
        assignment_title: String::new(),
        student_name: "Ada Lovelace".to_owned(),
    }
}

#[test]
fn complete_draft_validates_with_optional_titles_empty() {
    let payload = complete_draft().validate().expect("should validate");
    assert!((payload.score - 87.5).abs() < f64::EPSILON);
    assert!(payload.assignment_title.is_empty());
}

#[test]
fn non_numeric_score_fails_with_literal_message() {
    let mut draft = complete_draft();
    draft.score = "top marks".to_owned();
    assert_eq!(
        draft.validate().unwrap_err().get("score"),
        Some("Score must be a valid number!")
    );
}

#[test]
fn empty_score_fails() {
    let mut draft = complete_draft();
    draft.score = String::new();
    assert!(draft.validate().unwrap_err().get("score").is_some());
}

#[test]
fn student_name_is_required() {
    let mut draft = complete_draft();
    draft.student_name = String::new();
    assert_eq!(
        draft.validate().unwrap_err().get("studentName"),
        Some("Student name is required!")
    );
}
