//! Grade (level) create/update form.

#[cfg(test)]
#[path = "grade_test.rs"]
mod grade_test;

use serde::Serialize;

use super::FieldErrors;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradeDraft {
    pub level: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradePayload {
    pub level: i64,
}

impl GradeDraft {
    pub fn validate(&self) -> Result<GradePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let level = if self.level.trim().is_empty() {
            errors.push("level", "Level is required");
            0
        } else {
            match self.level.trim().parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    errors.push("level", "Level must be a number");
                    0
                }
            }
        };
        errors.into_result(GradePayload { level })
    }
}
