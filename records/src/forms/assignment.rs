//! Assignment create/update form.

#[cfg(test)]
#[path = "assignment_test.rs"]
mod assignment_test;

use serde::Serialize;

use super::{FieldErrors, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignmentDraft {
    pub assignment_title: String,
    pub start_date: String,
    pub due_date: String,
    pub lesson_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssignmentPayload {
    #[serde(rename = "assignmentTitle")]
    pub assignment_title: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    #[serde(rename = "lessonName")]
    pub lesson_name: String,
}

impl AssignmentDraft {
    pub fn validate(&self) -> Result<AssignmentPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "assignmentTitle",
            rules::required(&self.assignment_title, "Assignment title is required"),
        );
        errors.check("startDate", rules::required(&self.start_date, "Start date is required"));
        errors.check("dueDate", rules::required(&self.due_date, "Due date is required"));
        errors.check("lessonName", rules::required(&self.lesson_name, "Lesson name is required"));

        let payload = AssignmentPayload {
            assignment_title: self.assignment_title.trim().to_owned(),
            start_date: self.start_date.trim().to_owned(),
            due_date: self.due_date.trim().to_owned(),
            lesson_name: self.lesson_name.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}
