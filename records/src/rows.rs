//! View rows and the raw→row projections behind every list page.
//!
//! DESIGN
//! ======
//! A projection renames backend fields to display names, joins name parts,
//! formats dates, flattens one level of related-object arrays into joined
//! strings, and substitutes a documented default (usually `"N/A"`) for every
//! missing relation. Projections never fail: a record that deserialized is
//! always renderable.

#[cfg(test)]
#[path = "rows_test.rs"]
mod rows_test;

use serde::{Deserialize, Serialize};

use crate::datetime::{format_date, format_time};
use crate::raw;

pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_STUDENT_PHOTO: &str = "/images/default-student.png";
pub const DEFAULT_TEACHER_PHOTO: &str = "/images/default-teacher.png";
pub const NO_LESSONS_ASSIGNED: &str = "No lessons assigned";
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Render a loosely-typed backend scalar (number or string) for display.
/// Missing, null, and empty values yield `None`.
fn scalar(value: Option<&serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

// =============================================================================
// STUDENT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRow {
    pub id: i64,
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub photo: String,
    pub phone: String,
    pub grade: String,
    pub class: String,
    pub address: String,
}

#[must_use]
pub fn project_student(raw: raw::RawStudent) -> StudentRow {
    StudentRow {
        id: raw.id,
        student_id: or_na(raw.student_id),
        name: format!("{} {}", raw.student_name, raw.surname).trim().to_owned(),
        email: raw.email.unwrap_or_default(),
        photo: raw
            .img
            .filter(|img| !img.is_empty())
            .unwrap_or_else(|| DEFAULT_STUDENT_PHOTO.to_owned()),
        phone: raw.phone.unwrap_or_default(),
        grade: or_na(raw.grade.and_then(|g| scalar(g.level.as_ref()))),
        class: or_na(raw.class.and_then(|c| c.class_name)),
        address: raw.address,
    }
}

// =============================================================================
// TEACHER
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeacherRow {
    pub id: i64,
    pub teacher_id: String,
    pub name: String,
    pub email: String,
    pub photo: String,
    pub phone: String,
    pub subjects: String,
    pub classes: String,
    pub lessons: String,
    pub address: String,
}

fn join_names(items: Option<Vec<String>>) -> String {
    items.map(|v| v.join(", ")).unwrap_or_default()
}

#[must_use]
pub fn project_teacher(raw: raw::RawTeacher) -> TeacherRow {
    TeacherRow {
        id: raw.id,
        teacher_id: or_na(raw.teacher_id),
        name: format!("{} {}", raw.teacher_name, raw.surname).trim().to_owned(),
        email: raw.email.unwrap_or_default(),
        photo: raw
            .img
            .filter(|img| !img.is_empty())
            .unwrap_or_else(|| DEFAULT_TEACHER_PHOTO.to_owned()),
        phone: raw.phone.unwrap_or_default(),
        subjects: join_names(
            raw.subjects.map(|s| s.into_iter().filter_map(|x| x.subject_name).collect()),
        ),
        classes: join_names(
            raw.classes.map(|c| c.into_iter().filter_map(|x| x.class_name).collect()),
        ),
        lessons: join_names(
            raw.lessons.map(|l| l.into_iter().filter_map(|x| x.lesson_name).collect()),
        ),
        address: raw.address,
    }
}

// =============================================================================
// PARENT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParentRow {
    pub id: i64,
    pub name: String,
    pub students: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[must_use]
pub fn project_parent(raw: raw::RawParent) -> ParentRow {
    ParentRow {
        id: raw.id,
        name: format!("{} {}", raw.parent_name, raw.surname).trim().to_owned(),
        students: join_names(
            raw.students.map(|s| s.into_iter().filter_map(|x| x.student_name).collect()),
        ),
        email: raw.email.unwrap_or_default(),
        phone: or_na(raw.phone),
        address: or_na(raw.address),
    }
}

// =============================================================================
// CLASS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassRow {
    pub id: i64,
    pub name: String,
    pub capacity: String,
    pub grade: String,
    pub supervisor: String,
}

#[must_use]
pub fn project_class(raw: raw::RawClass) -> ClassRow {
    ClassRow {
        id: raw.class_id,
        name: raw.class_name,
        capacity: raw.capacity.map(|c| c.to_string()).unwrap_or_default(),
        grade: or_na(raw.grade.and_then(|g| scalar(g.level.as_ref()))),
        supervisor: or_na(raw.teacher.and_then(|t| t.teacher_name)),
    }
}

// =============================================================================
// SUBJECT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubjectRow {
    pub id: i64,
    pub subject_name: String,
    pub teachers: String,
    pub lessons: String,
}

#[must_use]
pub fn project_subject(raw: raw::RawSubject) -> SubjectRow {
    let lessons = raw
        .lessons
        .unwrap_or_default()
        .into_iter()
        .filter_map(|l| {
            let name = l.lesson_name?;
            Some(match l.day {
                Some(day) => format!("{name} ({day})"),
                None => name,
            })
        })
        .collect::<Vec<_>>();
    SubjectRow {
        id: raw.subject_id,
        subject_name: raw.subject_name,
        teachers: or_na(raw.teacher.and_then(|t| t.teacher_name)),
        lessons: if lessons.is_empty() {
            NO_LESSONS_ASSIGNED.to_owned()
        } else {
            lessons.join(", ")
        },
    }
}

// =============================================================================
// LESSON
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LessonRow {
    pub id: i64,
    pub name: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub class: String,
    pub teacher: String,
}

#[must_use]
pub fn project_lesson(raw: raw::RawLesson) -> LessonRow {
    LessonRow {
        id: raw.lesson_id,
        name: raw.lesson_name,
        day: or_na(raw.day),
        start_time: format_time(&raw.start_time.unwrap_or_default()),
        end_time: format_time(&raw.end_time.unwrap_or_default()),
        subject: or_na(raw.subject.and_then(|s| s.subject_name)),
        class: or_na(raw.class.and_then(|c| c.class_name)),
        teacher: or_na(raw.teacher.and_then(|t| t.teacher_name)),
    }
}

// =============================================================================
// EXAM
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExamRow {
    pub id: i64,
    pub exam_title: String,
    pub lesson_name: String,
    pub score: String,
    pub start_time: String,
    pub end_time: String,
}

#[must_use]
pub fn project_exam(raw: raw::RawExam) -> ExamRow {
    // An exam may carry multiple results; the list shows the first.
    let first_score = raw
        .results
        .as_ref()
        .and_then(|r| r.first())
        .and_then(|r| scalar(r.score.as_ref()));
    ExamRow {
        id: raw.exam_id,
        exam_title: raw.exam_title,
        lesson_name: or_na(raw.lesson.and_then(|l| l.lesson_name)),
        score: or_na(first_score),
        start_time: raw.start_time,
        end_time: raw.end_time,
    }
}

// =============================================================================
// ASSIGNMENT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub id: i64,
    pub assignment_title: String,
    pub start_date: String,
    pub due_date: String,
    pub lesson: String,
}

#[must_use]
pub fn project_assignment(raw: raw::RawAssignment) -> AssignmentRow {
    AssignmentRow {
        id: raw.assignment_id,
        assignment_title: raw.assignment_title,
        start_date: format_date(&raw.start_date),
        due_date: format_date(&raw.due_date),
        lesson: or_na(raw.lesson.and_then(|l| l.lesson_name)),
    }
}

// =============================================================================
// RESULT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: i64,
    pub student_name: String,
    pub exam_title: String,
    pub assignment_title: String,
    pub score: String,
}

#[must_use]
pub fn project_result(raw: raw::RawResult) -> ResultRow {
    ResultRow {
        id: raw.result_id,
        student_name: raw
            .student
            .and_then(|s| s.student_name)
            .unwrap_or_else(|| "Unknown".to_owned()),
        exam_title: or_na(raw.exam.and_then(|e| e.exam_title)),
        assignment_title: or_na(raw.assignment.and_then(|a| a.assignment_title)),
        score: scalar(raw.score.as_ref()).unwrap_or_else(|| "0".to_owned()),
    }
}

// =============================================================================
// ATTENDANCE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRow {
    pub id: i64,
    pub date: String,
    pub present: String,
    pub student_name: String,
    pub lesson_name: String,
}

#[must_use]
pub fn project_attendance(raw: raw::RawAttendance) -> AttendanceRow {
    AttendanceRow {
        id: raw.attendance_id,
        date: format_date(&raw.date),
        present: if raw.present { "Yes" } else { "No" }.to_owned(),
        student_name: or_na(raw.student.and_then(|s| s.student_name)),
        lesson_name: or_na(raw.lesson.and_then(|l| l.lesson_name)),
    }
}

// =============================================================================
// EVENT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub class: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[must_use]
pub fn project_event(raw: raw::RawEvent) -> EventRow {
    EventRow {
        id: raw.event_id,
        title: raw.event_title,
        description: raw.description.unwrap_or_default(),
        class: or_na(raw.class.and_then(|c| c.class_name)),
        date: format_date(&raw.start_time),
        start_time: format_time(&raw.start_time),
        end_time: format_time(&raw.end_time),
    }
}

// =============================================================================
// ANNOUNCEMENT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
    pub class: String,
}

#[must_use]
pub fn project_announcement(raw: raw::RawAnnouncement) -> AnnouncementRow {
    AnnouncementRow {
        id: raw.announcement_id,
        title: raw.announcement_title,
        description: raw
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_owned()),
        date: format_date(&raw.date),
        class: or_na(raw.class.and_then(|c| c.class_name)),
    }
}

// =============================================================================
// GRADE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeStudent {
    pub student_id: String,
    pub student_name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeRow {
    pub id: i64,
    pub level: String,
    pub students: Vec<GradeStudent>,
}

#[must_use]
pub fn project_grade(raw: raw::RawGrade) -> GradeRow {
    GradeRow {
        id: raw.grade_id,
        level: or_na(scalar(raw.level.as_ref())),
        students: raw
            .students
            .unwrap_or_default()
            .into_iter()
            .map(|s| GradeStudent {
                student_id: s.student_id.map(|id| id.to_string()).unwrap_or_default(),
                student_name: s.student_name.unwrap_or_default(),
                email: s.email.unwrap_or_default(),
            })
            .collect(),
    }
}

// =============================================================================
// AGGREGATES
// =============================================================================

/// One day of the dashboard attendance chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceBucket {
    pub name: String,
    pub present: i64,
    pub absent: i64,
}

impl From<raw::RawAttendanceBucket> for AttendanceBucket {
    fn from(raw: raw::RawAttendanceBucket) -> Self {
        Self { name: raw.name, present: raw.present, absent: raw.absent }
    }
}

/// Boys/girls split for the count chart. Missing buckets count zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenderCount {
    pub boys: i64,
    pub girls: i64,
}

impl GenderCount {
    #[must_use]
    pub fn from_counts(rows: &[raw::RawSexCount]) -> Self {
        let pick = |sex: &str| rows.iter().find(|r| r.sex == sex).map_or(0, |r| r.count);
        Self { boys: pick("MALE"), girls: pick("FEMALE") }
    }

    /// Percentage of the total for one bucket, `0.0` when the school is empty.
    #[must_use]
    pub fn percent(self, bucket: i64) -> f64 {
        let total = self.boys + self.girls;
        if total == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                bucket as f64 * 100.0 / total as f64
            }
        }
    }
}
