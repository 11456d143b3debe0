//! Student create/update form.
//!
//! Student records carry an optional photo, so the payload ships as
//! multipart form data rather than JSON; `multipart_fields` yields the
//! text parts and the client appends the file part when one was chosen.

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

use super::{FieldErrors, Sex, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentDraft {
    pub username: String,
    pub student_name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub blood_type: String,
    pub sex: String,
    pub birthday: String,
    pub parent_name: String,
    pub class_name: String,
    pub level: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudentPayload {
    pub username: String,
    pub student_name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub blood_type: String,
    pub sex: Sex,
    pub birthday: String,
    pub parent_name: String,
    pub class_name: String,
    pub level: String,
}

impl StudentDraft {
    pub fn validate(&self) -> Result<StudentPayload, FieldErrors> {
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
        errors.check("studentName", rules::required(&self.student_name, "First name is required"));
        errors.check("surname", rules::required(&self.surname, "Surname is required"));
        errors.check(
            "email",
            rules::optional(&self.email, |v| rules::email(v, "Invalid email address!")),
        );
        errors.check("address", rules::required(&self.address, "Address is required"));
        errors.check("bloodType", rules::required(&self.blood_type, "Blood type is required"));
        let sex = Sex::parse(&self.sex);
        if sex.is_none() {
            errors.push("sex", "Sex is required");
        }
        errors.check("birthday", rules::required(&self.birthday, "Birthday is required"));
        errors.check("parentName", rules::required(&self.parent_name, "Parent name is required"));
        errors.check("className", rules::required(&self.class_name, "Class name is required"));
        errors.check("level", rules::required(&self.level, "Grade level is required"));

        let payload = StudentPayload {
            username: self.username.trim().to_owned(),
            student_name: self.student_name.trim().to_owned(),
            surname: self.surname.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
            blood_type: self.blood_type.trim().to_owned(),
            sex: sex.unwrap_or(Sex::Male),
            birthday: self.birthday.trim().to_owned(),
            parent_name: self.parent_name.trim().to_owned(),
            class_name: self.class_name.trim().to_owned(),
            level: self.level.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}

impl StudentPayload {
    /// Text parts of the multipart body, in backend field naming.
    #[must_use]
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("username", self.username.clone()),
            ("studentName", self.student_name.clone()),
            ("surname", self.surname.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("address", self.address.clone()),
            ("bloodType", self.blood_type.clone()),
            ("sex", self.sex.as_str().to_owned()),
            ("birthday", self.birthday.clone()),
            ("parentName", self.parent_name.clone()),
            ("className", self.class_name.clone()),
            ("level", self.level.clone()),
        ]
    }
}
