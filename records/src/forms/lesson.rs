//! Lesson create/update form.

#[cfg(test)]
#[path = "lesson_test.rs"]
mod lesson_test;

use serde::Serialize;

use super::{FieldErrors, LessonDay, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LessonDraft {
    pub lesson_name: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub subject_name: String,
    pub class_name: String,
    pub teacher_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LessonPayload {
    #[serde(rename = "lessonName")]
    pub lesson_name: String,
    pub day: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    #[serde(rename = "subjectName")]
    pub subject_name: String,
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "teacherName")]
    pub teacher_name: String,
}

impl LessonDraft {
    pub fn validate(&self) -> Result<LessonPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("lessonName", rules::required(&self.lesson_name, "Lesson name is required"));
        let day = LessonDay::parse(&self.day);
        if day.is_none() {
            errors.push("day", "Day is required");
        }
        errors.check("startTime", rules::required(&self.start_time, "Start time is required"));
        errors.check("endTime", rules::required(&self.end_time, "End time is required"));
        errors.check("subjectName", rules::required(&self.subject_name, "Subject is required"));
        errors.check("className", rules::required(&self.class_name, "Class name is required"));
        errors.check(
            "teacherName",
            rules::required(&self.teacher_name, "Teacher name is required"),
        );

        let payload = LessonPayload {
            lesson_name: self.lesson_name.trim().to_owned(),
            day: day.map(LessonDay::as_str).unwrap_or_default().to_owned(),
            start_time: self.start_time.trim().to_owned(),
            end_time: self.end_time.trim().to_owned(),
            subject_name: self.subject_name.trim().to_owned(),
            class_name: self.class_name.trim().to_owned(),
            teacher_name: self.teacher_name.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}
