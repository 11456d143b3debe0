//! Event create/update form.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::Serialize;

use super::{FieldErrors, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventDraft {
    pub event_title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub class_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventPayload {
    #[serde(rename = "eventTitle")]
    pub event_title: String,
    pub description: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    #[serde(rename = "className")]
    pub class_name: String,
}

impl EventDraft {
    pub fn validate(&self) -> Result<EventPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("eventTitle", rules::required(&self.event_title, "Event title is required"));
        errors.check("startTime", rules::required(&self.start_time, "Start time is required"));
        errors.check("endTime", rules::required(&self.end_time, "End time is required"));

        let payload = EventPayload {
            event_title: self.event_title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            start_time: self.start_time.trim().to_owned(),
            end_time: self.end_time.trim().to_owned(),
            class_name: self.class_name.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}
