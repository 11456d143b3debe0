//! Teacher create/update form. Multipart like the student form.

#[cfg(test)]
#[path = "teacher_test.rs"]
mod teacher_test;

use super::{FieldErrors, Sex, rules};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeacherDraft {
    pub username: String,
    pub teacher_name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub blood_type: String,
    pub sex: String,
    pub birthday: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeacherPayload {
    pub username: String,
    pub teacher_name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub blood_type: String,
    pub sex: Sex,
    pub birthday: String,
}

impl TeacherDraft {
    pub fn validate(&self) -> Result<TeacherPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("username", rules::required(&self.username, "Username is required"));
        errors.check(
            "teacherName",
            rules::required(&self.teacher_name, "Teacher Name is required"),
        );
        errors.check("surname", rules::required(&self.surname, "Surname is required"));
        errors.check(
            "email",
            rules::optional(&self.email, |v| rules::email(v, "Invalid email address")),
        );
        errors.check("address", rules::required(&self.address, "Address is required"));
        errors.check("bloodType", rules::required(&self.blood_type, "Blood type is required"));
        let sex = Sex::parse(&self.sex);
        if sex.is_none() {
            errors.push("sex", "Sex is required");
        }
        errors.check("birthday", rules::required(&self.birthday, "Birthday is required"));

        let payload = TeacherPayload {
            username: self.username.trim().to_owned(),
            teacher_name: self.teacher_name.trim().to_owned(),
            surname: self.surname.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
            blood_type: self.blood_type.trim().to_owned(),
            sex: sex.unwrap_or(Sex::Male),
            birthday: self.birthday.trim().to_owned(),
        };
        errors.into_result(payload)
    }
}

impl TeacherPayload {
    /// Text parts of the multipart body, in backend field naming.
    #[must_use]
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("username", self.username.clone()),
            ("teacherName", self.teacher_name.clone()),
            ("surname", self.surname.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("address", self.address.clone()),
            ("bloodType", self.blood_type.clone()),
            ("sex", self.sex.as_str().to_owned()),
            ("birthday", self.birthday.clone()),
        ]
    }
}
