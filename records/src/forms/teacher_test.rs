use super::*;

fn complete_draft() -> TeacherDraft {
    TeacherDraft {
        username: "aturing".to_owned(),
        teacher_name: "Alan".to_owned(),
        surname: "Turing".to_owned(),
        email: "alan@school.test".to_owned(),
        phone: String::new(),
        address: "Bletchley Park".to_owned(),
        blood_type: "O-".to_owned(),
        sex: "MALE".to_owned(),
        birthday: "1985-06-23".to_owned(),
    }
}

#[test]
fn complete_draft_validates_without_phone() {
    let payload = complete_draft().validate().expect("should validate");
    assert_eq!(payload.sex, Sex::Male);
    assert!(payload.phone.is_empty());
}

#[test]
fn required_fields_block_when_empty() {
    let cases: [(&str, fn(&mut TeacherDraft)); 6] = [
        ("username", |d| d.username.clear()),
        ("teacherName", |d| d.teacher_name.clear()),
        ("surname", |d| d.surname.clear()),
        ("address", |d| d.address.clear()),
        ("bloodType", |d| d.blood_type.clear()),
        ("birthday", |d| d.birthday.clear()),
    ];
    for (field, clear) in cases {
        let mut draft = complete_draft();
        clear(&mut draft);
        assert!(draft.validate().unwrap_err().get(field).is_some(), "{field}");
    }
}

#[test]
fn invalid_email_reports_field_message() {
    let mut draft = complete_draft();
    draft.email = "alan@".to_owned();
    assert_eq!(draft.validate().unwrap_err().get("email"), Some("Invalid email address"));
}

#[test]
fn multipart_fields_carry_nine_text_parts() {
    let payload = complete_draft().validate().unwrap();
    assert_eq!(payload.multipart_fields().len(), 9);
}
