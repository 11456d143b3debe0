//! Attendance create/update form. Presence is an explicit yes/no choice,
//! not a default; an untouched selector fails validation.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use serde::Serialize;

use super::{FieldErrors, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttendanceDraft {
    pub date: String,
    pub present: Option<bool>,
    pub student_name: String,
    pub lesson_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttendancePayload {
    pub date: String,
    pub present: bool,
    #[serde(rename = "studentName")]
    pub student_name: String,
    #[serde(rename = "lessonName")]
    pub lesson_name: String,
}

impl AttendanceDraft {
    pub fn validate(&self) -> Result<AttendancePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("date", rules::required(&self.date, "Date is required"));
        if self.present.is_none() {
            errors.push("present", "Presence status is required");
        }
        errors.check(
            "studentName",
            rules::required(&self.student_name, "Student name is required"),
        );
        errors.check("lessonName", rules::required(&self.lesson_name, "Lesson name is required"));

        let payload = AttendancePayload {
            date: self.date.trim().to_owned(),
            present: self.present.unwrap_or(false),
            student_name: self.student_name.trim().to_owned(),
            lesson_name: self.lesson_name.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}
