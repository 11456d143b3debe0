use super::*;

#[test]
fn parse_accepts_any_case() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("TEACHER"), Some(Role::Teacher));
    assert_eq!(Role::parse("principal"), None);
}

#[test]
fn only_admin_manages() {
    let mut session = Session::default();
    assert!(session.can_manage());
    session.role = Role::Teacher;
    assert!(!session.can_manage());
    session.role = Role::Student;
    assert!(!session.can_manage());
}

#[test]
fn session_serializes_with_lowercase_role() {
    let json = serde_json::to_value(Session::default()).unwrap();
    assert_eq!(json["role"], "admin");
    assert_eq!(json["api_base"], "http://localhost:4000");
}
