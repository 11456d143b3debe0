//! Class create/update form.

#[cfg(test)]
#[path = "class_test.rs"]
mod class_test;

use serde::Serialize;

use super::{FieldErrors, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassDraft {
    pub class_name: String,
    pub capacity: String,
    pub teacher_name: String,
    pub level: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassPayload {
    #[serde(rename = "className")]
    pub class_name: String,
    pub capacity: i64,
    #[serde(rename = "teacherName")]
    pub teacher_name: String,
    pub level: String,
}

impl ClassDraft {
    pub fn validate(&self) -> Result<ClassPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("className", rules::required(&self.class_name, "Class Name is required"));
        let capacity = match rules::int_at_least(
            &self.capacity,
            1,
            "Capacity must be at least 1",
            "Capacity must be a valid number",
        ) {
            Ok(value) => value,
            Err(message) => {
                errors.push("capacity", message);
                0
            }
        };
        errors.check(
            "teacherName",
            rules::required(&self.teacher_name, "Teacher Name is required"),
        );
        errors.check("level", rules::required(&self.level, "Grade level is required"));

        let payload = ClassPayload {
            class_name: self.class_name.trim().to_owned(),
            capacity,
            teacher_name: self.teacher_name.trim().to_owned(),
            level: self.level.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}
