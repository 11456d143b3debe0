use super::*;

fn complete_draft() -> AnnouncementDraft {
    AnnouncementDraft {
        announcement_title: "Snow day".to_owned(),
        description: "School closed".to_owned(),
        date: "2025-01-05".to_owned(),
        class_name: String::new(),
    }
}

#[test]
fn complete_draft_validates() {
    assert!(complete_draft().validate().is_ok());
}

#[test]
fn title_and_date_are_required() {
    let cases: [(&str, fn(&mut AnnouncementDraft)); 2] = [
        ("announcementTitle", |d| d.announcement_title.clear()),
        ("date", |d| d.date.clear()),
    ];
    for (field, clear) in cases {
        let mut draft = complete_draft();
        clear(&mut draft);
        assert!(draft.validate().unwrap_err().get(field).is_some(), "{field}");
    }
}

#[test]
fn description_is_optional() {
    let mut draft = complete_draft();
    draft.description = String::new();
    assert!(draft.validate().is_ok());
}
