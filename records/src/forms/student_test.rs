use super::*;

fn complete_draft() -> StudentDraft {
    StudentDraft {
        username: "ada_l".to_owned(),
        student_name: "Ada".to_owned(),
        surname: "Lovelace".to_owned(),
        email: "ada@school.test".to_owned(),
        phone: "555-0100".to_owned(),
        address: "12 Analytical Row".to_owned(),
        blood_type: "A+".to_owned(),
        sex: "FEMALE".to_owned(),
        birthday: "2012-12-10".to_owned(),
        parent_name: "Anne".to_owned(),
        class_name: "4B".to_owned(),
        level: "4".to_owned(),
    }
}

#[test]
fn complete_draft_validates() {
    let payload = complete_draft().validate().expect("should validate");
    assert_eq!(payload.sex, Sex::Female);
    assert_eq!(payload.student_name, "Ada");
}

#[test]
fn short_username_is_rejected_with_literal_message() {
    let mut draft = complete_draft();
    draft.username = "ab".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("username"), Some("Username must be at least 3 characters long!"));
}

#[test]
fn every_required_field_blocks_when_empty() {
    let cases: [(&str, fn(&mut StudentDraft)); 8] = [
        ("studentName", |d| d.student_name.clear()),
        ("surname", |d| d.surname.clear()),
        ("address", |d| d.address.clear()),
        ("bloodType", |d| d.blood_type.clear()),
        ("birthday", |d| d.birthday.clear()),
        ("parentName", |d| d.parent_name.clear()),
        ("className", |d| d.class_name.clear()),
        ("level", |d| d.level.clear()),
    ];
    for (field, clear) in cases {
        let mut draft = complete_draft();
        clear(&mut draft);
        let errors = draft.validate().unwrap_err();
        assert!(errors.get(field).is_some(), "{field} should fail when empty");
    }
}

#[test]
fn email_is_optional_but_checked_when_present() {
    let mut draft = complete_draft();
    draft.email = String::new();
    assert!(draft.validate().is_ok());

    draft.email = "not-an-email".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("email"), Some("Invalid email address!"));
}

#[test]
fn sex_must_be_a_known_variant() {
    let mut draft = complete_draft();
    draft.sex = "OTHER".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("sex"), Some("Sex is required"));
}

#[test]
fn multipart_fields_use_backend_names() {
    let payload = complete_draft().validate().unwrap();
    let fields = payload.multipart_fields();
    assert!(fields.contains(&("studentName", "Ada".to_owned())));
    assert!(fields.contains(&("sex", "FEMALE".to_owned())));
    assert_eq!(fields.len(), 12);
}
