use super::*;

#[test]
fn get_all_paths_match_backend_naming() {
    assert_eq!(get_all(EntityKind::Student), "/api/getAllStudents");
    assert_eq!(get_all(EntityKind::Attendance), "/api/getAllAttendance");
    assert_eq!(get_all(EntityKind::Class), "/api/getAllClasses");
}

#[test]
fn update_carries_id_only_where_backend_expects_it() {
    assert_eq!(update(EntityKind::Exam, 3), "/api/updateExam/3");
    assert_eq!(update(EntityKind::Parent, 12), "/api/updateParent/12");
    assert_eq!(update(EntityKind::Student, 9), "/api/updateStudent");
    assert_eq!(update(EntityKind::Teacher, 9), "/api/updateTeacher");
}

#[test]
fn delete_always_carries_id() {
    assert_eq!(delete(EntityKind::Announcement, 7), "/api/deleteAnnouncement/7");
    assert_eq!(delete(EntityKind::Exam, 1), "/api/deleteExam/1");
}

#[test]
fn aggregate_paths() {
    assert_eq!(events_by_date("2025-01-10"), "/api/getEventsByDate?date=2025-01-10");
    assert_eq!(events_by_type("teacherId", "t-4"), "/api/getEventsByType?type=teacherId&id=t-4");
}

#[test]
fn join_tolerates_trailing_slash() {
    assert_eq!(join("http://localhost:4000", "/api/x"), "http://localhost:4000/api/x");
    assert_eq!(join("http://localhost:4000/", "/api/x"), "http://localhost:4000/api/x");
}
