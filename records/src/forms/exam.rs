//! Exam create/update form. Updates flow through the shared action layer.

#[cfg(test)]
#[path = "exam_test.rs"]
mod exam_test;

use serde::Serialize;

use super::{FieldErrors, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExamDraft {
    pub exam_title: String,
    pub start_time: String,
    pub end_time: String,
    pub lesson_name: String,
    pub score: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExamPayload {
    #[serde(rename = "examTitle")]
    pub exam_title: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    #[serde(rename = "lessonName")]
    pub lesson_name: String,
    pub score: String,
}

impl ExamDraft {
    pub fn validate(&self) -> Result<ExamPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("examTitle", rules::required(&self.exam_title, "Exam title is required"));
        errors.check("startTime", rules::required(&self.start_time, "Start time is required"));
        errors.check("endTime", rules::required(&self.end_time, "End time is required"));
        errors.check("lessonName", rules::required(&self.lesson_name, "Lesson name is required"));
        errors.check("score", rules::required(&self.score, "Score is required"));

        let payload = ExamPayload {
            exam_title: self.exam_title.trim().to_owned(),
            start_time: self.start_time.trim().to_owned(),
            end_time: self.end_time.trim().to_owned(),
            lesson_name: self.lesson_name.trim().to_owned(),
            score: self.score.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}
