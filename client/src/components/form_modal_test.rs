use super::*;
use records::rows::ExamRow;

fn exam_row() -> ExamRow {
    ExamRow {
        id: 3,
        exam_title: "Midterm".to_owned(),
        lesson_name: "Algebra".to_owned(),
        score: "87".to_owned(),
        start_time: "2025-03-01T09:00:00Z".to_owned(),
        end_time: "2025-03-01T11:00:00Z".to_owned(),
    }
}

#[test]
fn seed_reports_its_entity_kind() {
    assert_eq!(FormSeed::Exam(exam_row()).kind(), EntityKind::Exam);
}

#[test]
fn intent_kind_covers_all_three_shapes() {
    assert_eq!(ModalIntent::Create(EntityKind::Class).kind(), EntityKind::Class);
    assert_eq!(ModalIntent::Update(FormSeed::Exam(exam_row())).kind(), EntityKind::Exam);
    assert_eq!(
        ModalIntent::Delete { kind: EntityKind::Parent, id: 9 }.kind(),
        EntityKind::Parent
    );
}

#[test]
fn unwired_delete_message_names_the_table() {
    assert_eq!(
        unwired_delete_message(EntityKind::Student),
        "Delete is not wired for student records."
    );
}

#[test]
fn trigger_styling_follows_intent() {
    assert_eq!(
        ModalIntent::Create(EntityKind::Exam).trigger_class(),
        "modal-trigger modal-trigger--create"
    );
    assert_eq!(
        ModalIntent::Delete { kind: EntityKind::Exam, id: 1 }.trigger_label(),
        "Delete"
    );
}
