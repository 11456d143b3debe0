use super::*;

fn complete_draft() -> EventDraft {
    EventDraft {
        event_title: "Science Fair".to_owned(),
        description: String::new(),
        start_time: "2025-05-20T10:30".to_owned(),
        end_time: "2025-05-20T15:00".to_owned(),
        class_name: String::new(),
    }
}

#[test]
fn description_and_class_are_optional() {
    assert!(complete_draft().validate().is_ok());
}

#[test]
fn title_and_times_are_required() {
    let cases: [(&str, fn(&mut EventDraft)); 3] = [
        ("eventTitle", |d| d.event_title.clear()),
        ("startTime", |d| d.start_time.clear()),
        ("endTime", |d| d.end_time.clear()),
    ];
    for (field, clear) in cases {
        let mut draft = complete_draft();
        clear(&mut draft);
        assert!(draft.validate().unwrap_err().get(field).is_some(), "{field}");
    }
}
