//! Result (score) create/update form. A result ties a student's score to
//! an exam, an assignment, or both, so the two titles are optional but the
//! score itself must be numeric.

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

use serde::Serialize;

use super::{FieldErrors, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultDraft {
    pub score: String,
    pub exam_title: String,
    pub assignment_title: String,
    pub student_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultPayload {
    pub score: f64,
    #[serde(rename = "examTitle")]
    pub exam_title: String,
    #[serde(rename = "assignmentTitle")]
    pub assignment_title: String,
    #[serde(rename = "studentName")]
    pub student_name: String,
}

impl ResultDraft {
    pub fn validate(&self) -> Result<ResultPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let score = match rules::number(
            &self.score,
            "Score must be a valid number!",
            "Score must be a valid number!",
        ) {
            Ok(value) => value,
            Err(message) => {
                errors.push("score", message);
                0.0
            }
        };
        errors.check(
            "studentName",
            rules::required(&self.student_name, "Student name is required!"),
        );

        let payload = ResultPayload {
            score,
            exam_title: self.exam_title.trim().to_owned(),
            assignment_title: self.assignment_title.trim().to_owned(),
            student_name: self.student_name.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}
