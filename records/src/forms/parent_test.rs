use super::*;

fn complete_draft() -> ParentDraft {
    ParentDraft {
        username: "mshelley".to_owned(),
        parent_name: "Mary".to_owned(),
        surname: "Shelley".to_owned(),
        email: "mary@home.test".to_owned(),
        phone: "555-0199".to_owned(),
        address: "Villa Diodati".to_owned(),
    }
}

#[test]
fn complete_draft_validates() {
    assert!(complete_draft().validate().is_ok());
}

#[test]
fn email_is_mandatory_for_parents() {
    let mut draft = complete_draft();
    draft.email = String::new();
    assert_eq!(draft.validate().unwrap_err().get("email"), Some("Invalid email address"));
}

#[test]
fn required_fields_block_when_empty() {
    let cases: [(&str, fn(&mut ParentDraft)); 4] = [
        ("parentName", |d| d.parent_name.clear()),
        ("surname", |d| d.surname.clear()),
        ("phone", |d| d.phone.clear()),
        ("address", |d| d.address.clear()),
    ];
    for (field, clear) in cases {
        let mut draft = complete_draft();
        clear(&mut draft);
        assert!(draft.validate().unwrap_err().get(field).is_some(), "{field}");
    }
}

#[test]
fn payload_serializes_with_backend_field_names() {
    let json = serde_json::to_value(complete_draft().validate().unwrap()).unwrap();
    assert_eq!(json["parentName"], "Mary");
    assert_eq!(json["username"], "mshelley");
}
