//! Raw DTOs mirroring the school backend's JSON.
//!
//! Field names (including the capitalized relation objects like `Lesson`
//! and `Results`) match the wire format exactly via serde renames. Every
//! relation is optional: the backend omits them freely and the projection
//! layer supplies the display defaults.

use serde::Deserialize;

/// Nested relation payloads. The backend nests only the fields the list
/// pages read, so these stay minimal.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GradeRef {
    pub level: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ClassRef {
    #[serde(rename = "className")]
    pub class_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TeacherRef {
    #[serde(rename = "teacherName")]
    pub teacher_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct StudentRef {
    #[serde(rename = "studentId")]
    pub student_id: Option<i64>,
    #[serde(rename = "studentName")]
    pub student_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SubjectRef {
    #[serde(rename = "subjectName")]
    pub subject_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LessonRef {
    #[serde(rename = "lessonName")]
    pub lesson_name: Option<String>,
    pub day: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExamRef {
    #[serde(rename = "examTitle")]
    pub exam_title: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AssignmentRef {
    #[serde(rename = "assignmentTitle")]
    pub assignment_title: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResultRef {
    pub score: Option<serde_json::Value>,
}

// =============================================================================
// COLLECTION RECORDS
// =============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct RawStudent {
    pub id: i64,
    #[serde(rename = "studentId")]
    pub student_id: Option<String>,
    #[serde(rename = "studentName", default)]
    pub student_name: String,
    #[serde(default)]
    pub surname: String,
    pub email: Option<String>,
    pub img: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "Grade")]
    pub grade: Option<GradeRef>,
    #[serde(rename = "Class")]
    pub class: Option<ClassRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawTeacher {
    pub id: i64,
    #[serde(rename = "teacherId")]
    pub teacher_id: Option<String>,
    #[serde(rename = "teacherName", default)]
    pub teacher_name: String,
    #[serde(default)]
    pub surname: String,
    pub email: Option<String>,
    pub img: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "Subjects")]
    pub subjects: Option<Vec<SubjectRef>>,
    #[serde(rename = "Classes")]
    pub classes: Option<Vec<ClassRef>>,
    #[serde(rename = "Lessons")]
    pub lessons: Option<Vec<LessonRef>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawParent {
    pub id: i64,
    pub username: Option<String>,
    #[serde(rename = "parentName", default)]
    pub parent_name: String,
    #[serde(default)]
    pub surname: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "Students")]
    pub students: Option<Vec<StudentRef>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawClass {
    #[serde(rename = "classId")]
    pub class_id: i64,
    #[serde(rename = "className", default)]
    pub class_name: String,
    pub capacity: Option<i64>,
    #[serde(rename = "Grade")]
    pub grade: Option<GradeRef>,
    #[serde(rename = "Teacher")]
    pub teacher: Option<TeacherRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawSubject {
    #[serde(rename = "subjectId")]
    pub subject_id: i64,
    #[serde(rename = "subjectName", default)]
    pub subject_name: String,
    #[serde(rename = "Teacher")]
    pub teacher: Option<TeacherRef>,
    #[serde(rename = "Lessons")]
    pub lessons: Option<Vec<LessonRef>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawLesson {
    #[serde(rename = "lessonId")]
    pub lesson_id: i64,
    #[serde(rename = "lessonName", default)]
    pub lesson_name: String,
    pub day: Option<String>,
    #[serde(rename = "startTime")]
    pub start_time: Option<String>,
    #[serde(rename = "endTime")]
    pub end_time: Option<String>,
    #[serde(rename = "Subject")]
    pub subject: Option<SubjectRef>,
    #[serde(rename = "Class")]
    pub class: Option<ClassRef>,
    #[serde(rename = "Teacher")]
    pub teacher: Option<TeacherRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawExam {
    #[serde(rename = "examId")]
    pub exam_id: i64,
    #[serde(rename = "examTitle", default)]
    pub exam_title: String,
    #[serde(rename = "startTime", default)]
    pub start_time: String,
    #[serde(rename = "endTime", default)]
    pub end_time: String,
    #[serde(rename = "Lesson")]
    pub lesson: Option<LessonRef>,
    #[serde(rename = "Results")]
    pub results: Option<Vec<ResultRef>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawAssignment {
    #[serde(rename = "assignmentId")]
    pub assignment_id: i64,
    #[serde(rename = "assignmentTitle", default)]
    pub assignment_title: String,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    #[serde(rename = "Lesson")]
    pub lesson: Option<LessonRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawResult {
    #[serde(rename = "resultId")]
    pub result_id: i64,
    pub score: Option<serde_json::Value>,
    #[serde(rename = "Student")]
    pub student: Option<StudentRef>,
    #[serde(rename = "Exam")]
    pub exam: Option<ExamRef>,
    #[serde(rename = "Assignment")]
    pub assignment: Option<AssignmentRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawAttendance {
    #[serde(rename = "attendanceId")]
    pub attendance_id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub present: bool,
    #[serde(rename = "Student")]
    pub student: Option<StudentRef>,
    #[serde(rename = "Lesson")]
    pub lesson: Option<LessonRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "eventId")]
    pub event_id: i64,
    #[serde(rename = "eventTitle", default)]
    pub event_title: String,
    pub description: Option<String>,
    #[serde(rename = "startTime", default)]
    pub start_time: String,
    #[serde(rename = "endTime", default)]
    pub end_time: String,
    #[serde(rename = "Class")]
    pub class: Option<ClassRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawAnnouncement {
    #[serde(rename = "announcementId")]
    pub announcement_id: i64,
    #[serde(rename = "announcementTitle", default)]
    pub announcement_title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "Class")]
    pub class: Option<ClassRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawGrade {
    #[serde(rename = "gradeId")]
    pub grade_id: i64,
    pub level: Option<serde_json::Value>,
    #[serde(rename = "Students")]
    pub students: Option<Vec<StudentRef>>,
}

// =============================================================================
// AGGREGATES
// =============================================================================

/// One bucket of `/api/getChartAttendanceData`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawAttendanceBucket {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub present: i64,
    #[serde(default)]
    pub absent: i64,
}

/// Envelope of `/api/getChartAttendanceData`.
#[derive(Clone, Debug, Deserialize)]
pub struct RawAttendanceChart {
    pub data: Option<Vec<RawAttendanceBucket>>,
}

/// One row of `/api/getAllStudentsCount`.
#[derive(Clone, Debug, Deserialize)]
pub struct RawSexCount {
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub count: i64,
}

/// One entry of `/api/getEventsByType` (the week-schedule feed).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawScheduleEvent {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}
