//! Subject create/update form.

#[cfg(test)]
#[path = "subject_test.rs"]
mod subject_test;

use serde::Serialize;

use super::{FieldErrors, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubjectDraft {
    pub subject_name: String,
    pub teacher_name: String,
    pub lesson: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubjectPayload {
    #[serde(rename = "subjectName")]
    pub subject_name: String,
    #[serde(rename = "teacherName")]
    pub teacher_name: String,
    pub lesson: String,
}

impl SubjectDraft {
    pub fn validate(&self) -> Result<SubjectPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "subjectName",
            rules::required(&self.subject_name, "Subject Name is required"),
        );
        errors.check(
            "teacherName",
            rules::required(&self.teacher_name, "Teacher Name is required"),
        );
        errors.check("lesson", rules::required(&self.lesson, "Lesson is required"));

        let payload = SubjectPayload {
            subject_name: self.subject_name.trim().to_owned(),
            teacher_name: self.teacher_name.trim().to_owned(),
            lesson: self.lesson.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}
