//! Catalogue of school-backend endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every URL the dashboard touches is produced here, against a configured
//! base address. Nothing else in the repository concatenates API paths, so
//! the backend contract is visible (and testable) in one place.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::entity::EntityKind;

/// Default school-backend address when no configuration is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Collection-fetch GET path for an entity kind.
#[must_use]
pub fn get_all(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Teacher => "/api/getAllTeachers",
        EntityKind::Student => "/api/getAllStudents",
        EntityKind::Parent => "/api/getAllParents",
        EntityKind::Subject => "/api/getAllSubjects",
        EntityKind::Class => "/api/getAllClasses",
        EntityKind::Lesson => "/api/getAllLessons",
        EntityKind::Exam => "/api/getAllExams",
        EntityKind::Assignment => "/api/getAllAssignments",
        EntityKind::Result => "/api/getAllResults",
        // The backend names this one without the plural s.
        EntityKind::Attendance => "/api/getAllAttendance",
        EntityKind::Event => "/api/getAllEvents",
        EntityKind::Announcement => "/api/getAllAnnouncements",
        EntityKind::Grade => "/api/getAllGrades",
    }
}

/// Create POST path for an entity kind.
#[must_use]
pub fn add(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Teacher => "/api/addTeacher",
        EntityKind::Student => "/api/addStudent",
        EntityKind::Parent => "/api/addParent",
        EntityKind::Subject => "/api/addSubject",
        EntityKind::Class => "/api/addClass",
        EntityKind::Lesson => "/api/addLesson",
        EntityKind::Exam => "/api/addExam",
        EntityKind::Assignment => "/api/addAssignment",
        EntityKind::Result => "/api/addResult",
        EntityKind::Attendance => "/api/addAttendance",
        EntityKind::Event => "/api/addEvent",
        EntityKind::Announcement => "/api/addAnnouncement",
        EntityKind::Grade => "/api/addGrade",
    }
}

/// Update path for an entity kind. Student/teacher updates post the full
/// multipart payload to a fixed URL; the rest carry the id in the path.
#[must_use]
pub fn update(kind: EntityKind, id: i64) -> String {
    match kind {
        EntityKind::Teacher => "/api/updateTeacher".to_owned(),
        EntityKind::Student => "/api/updateStudent".to_owned(),
        EntityKind::Parent => format!("/api/updateParent/{id}"),
        EntityKind::Subject => format!("/api/updateSubject/{id}"),
        EntityKind::Class => format!("/api/updateClass/{id}"),
        EntityKind::Lesson => "/api/updateLesson".to_owned(),
        EntityKind::Exam => format!("/api/updateExam/{id}"),
        EntityKind::Assignment => "/api/updateAssignment".to_owned(),
        EntityKind::Result => format!("/api/updateResult/{id}"),
        EntityKind::Attendance => format!("/api/updateAttendance/{id}"),
        EntityKind::Event => "/api/updateEvent".to_owned(),
        EntityKind::Announcement => format!("/api/updateAnnouncement/{id}"),
        EntityKind::Grade => format!("/api/updateGrade/{id}"),
    }
}

/// Delete path for an entity kind.
#[must_use]
pub fn delete(kind: EntityKind, id: i64) -> String {
    match kind {
        EntityKind::Teacher => format!("/api/deleteTeacher/{id}"),
        EntityKind::Student => format!("/api/deleteStudent/{id}"),
        EntityKind::Parent => format!("/api/deleteParent/{id}"),
        EntityKind::Subject => format!("/api/deleteSubject/{id}"),
        EntityKind::Class => format!("/api/deleteClass/{id}"),
        EntityKind::Lesson => format!("/api/deleteLesson/{id}"),
        EntityKind::Exam => format!("/api/deleteExam/{id}"),
        EntityKind::Assignment => format!("/api/deleteAssignment/{id}"),
        EntityKind::Result => format!("/api/deleteResult/{id}"),
        EntityKind::Attendance => format!("/api/deleteAttendance/{id}"),
        EntityKind::Event => format!("/api/deleteEvent/{id}"),
        EntityKind::Announcement => format!("/api/deleteAnnouncement/{id}"),
        EntityKind::Grade => format!("/api/deleteGrade/{id}"),
    }
}

/// Aggregate endpoints used by the dashboard widgets.
pub const CHART_ATTENDANCE: &str = "/api/getChartAttendanceData";
pub const STUDENTS_COUNT: &str = "/api/getAllStudentsCount";

/// Events for a given calendar day, `YYYY-MM-DD`.
#[must_use]
pub fn events_by_date(date: &str) -> String {
    format!("/api/getEventsByDate?date={date}")
}

/// Schedule events scoped to a teacher or class. Teacher ids are opaque
/// strings, so the id passes through as-is.
#[must_use]
pub fn events_by_type(scope: &str, id: &str) -> String {
    format!("/api/getEventsByType?type={scope}&id={id}")
}

/// Join a path onto a base address, tolerating a trailing slash on the base.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
