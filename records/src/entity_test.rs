use super::*;

#[test]
fn all_contains_every_kind_once() {
    let mut seen = std::collections::HashSet::new();
    for kind in EntityKind::ALL {
        assert!(seen.insert(kind.table_name()), "duplicate: {kind:?}");
    }
    assert_eq!(seen.len(), 13);
}

#[test]
fn table_names_are_lowercase_singular() {
    assert_eq!(EntityKind::Exam.table_name(), "exam");
    assert_eq!(EntityKind::Announcement.table_name(), "announcement");
    assert_eq!(EntityKind::Class.table_name(), "class");
}

#[test]
fn serde_round_trips_lowercase() {
    let json = serde_json::to_string(&EntityKind::Attendance).unwrap();
    assert_eq!(json, "\"attendance\"");
    let back: EntityKind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, EntityKind::Attendance);
}

#[test]
fn only_three_kinds_have_wired_delete() {
    let wired: Vec<_> = EntityKind::ALL.iter().filter(|k| k.has_wired_delete()).collect();
    assert_eq!(wired.len(), 3);
    assert!(EntityKind::Exam.has_wired_delete());
    assert!(EntityKind::Announcement.has_wired_delete());
    assert!(EntityKind::Parent.has_wired_delete());
    assert!(!EntityKind::Student.has_wired_delete());
}

#[test]
fn route_segments_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for kind in EntityKind::ALL {
        assert!(seen.insert(kind.route_segment()));
    }
}
