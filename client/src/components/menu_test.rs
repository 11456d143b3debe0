use super::*;

#[test]
fn admin_sees_every_entry() {
    assert_eq!(entries_for(Role::Admin).len(), EntityKind::ALL.len());
}

#[test]
fn teacher_loses_the_parent_roster() {
    let entries = entries_for(Role::Teacher);
    assert!(!entries.contains(&EntityKind::Parent));
    assert_eq!(entries.len(), EntityKind::ALL.len() - 1);
}

#[test]
fn students_see_only_academic_surfaces() {
    let entries = entries_for(Role::Student);
    assert!(entries.contains(&EntityKind::Exam));
    assert!(!entries.contains(&EntityKind::Teacher));
    assert_eq!(entries, entries_for(Role::Parent));
}
