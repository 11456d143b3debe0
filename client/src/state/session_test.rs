use super::*;
use records::session::Role;

#[test]
fn backend_url_joins_against_session_base() {
    let session = Session { api_base: "http://school.test:4000".to_owned(), ..Session::default() };
    assert_eq!(
        backend_url(&session, "/api/getAllExams"),
        "http://school.test:4000/api/getAllExams"
    );
}

#[test]
fn default_state_is_loading_with_local_backend() {
    let state = SessionState::default();
    assert!(state.loading);
    assert_eq!(backend_url(&state.session, "/x"), "http://localhost:4000/x");
}

#[test]
fn manage_follows_role() {
    let mut state = SessionState::default();
    assert!(state.can_manage());
    state.session.role = Role::Student;
    assert!(!state.can_manage());
}
