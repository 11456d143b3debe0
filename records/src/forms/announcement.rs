//! Announcement create/update form. Updates flow through the shared action
//! layer.

#[cfg(test)]
#[path = "announcement_test.rs"]
mod announcement_test;

use serde::Serialize;

use super::{FieldErrors, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnouncementDraft {
    pub announcement_title: String,
    pub description: String,
    pub date: String,
    pub class_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnnouncementPayload {
    #[serde(rename = "announcementTitle")]
    pub announcement_title: String,
    pub description: String,
    pub date: String,
    #[serde(rename = "className")]
    pub class_name: String,
}

impl AnnouncementDraft {
    pub fn validate(&self) -> Result<AnnouncementPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "announcementTitle",
            rules::required(&self.announcement_title, "Announcement title is required"),
        );
        errors.check("date", rules::required(&self.date, "Date is required"));

        let payload = AnnouncementPayload {
            announcement_title: self.announcement_title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            date: self.date.trim().to_owned(),
            class_name: self.class_name.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}
