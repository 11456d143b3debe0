//! Parent create/update form. Updates flow through the shared action layer.

#[cfg(test)]
#[path = "parent_test.rs"]
mod parent_test;

use serde::Serialize;

use super::{FieldErrors, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParentDraft {
    pub username: String,
    pub parent_name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParentPayload {
    pub username: String,
    #[serde(rename = "parentName")]
    pub parent_name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ParentDraft {
    pub fn validate(&self) -> Result<ParentPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "username",
            rules::length(
                &self.username,
                3,
                20,
                "Username must be at least 3 characters long!",
                "Username must be at most 20 characters long!",
            ),
        );
        errors.check("parentName", rules::required(&self.parent_name, "Parent name is required"));
        errors.check("surname", rules::required(&self.surname, "Surname is required"));
        errors.check("email", rules::email(&self.email, "Invalid email address"));
        errors.check("phone", rules::required(&self.phone, "Phone is required"));
        errors.check("address", rules::required(&self.address, "Address is required"));

        let payload = ParentPayload {
            username: self.username.trim().to_owned(),
            parent_name: self.parent_name.trim().to_owned(),
            surname: self.surname.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}
