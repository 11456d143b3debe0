use super::*;

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = AppConfig::from_vars(None, None, None);
    assert_eq!(config.port, 3000);
    assert_eq!(config.school_api_url, "http://localhost:4000");
    assert_eq!(config.role, Role::Admin);
}

#[test]
fn explicit_values_win() {
    let config = AppConfig::from_vars(
        Some("8080".to_owned()),
        Some("http://school.internal:9000".to_owned()),
        Some("teacher".to_owned()),
    );
    assert_eq!(config.port, 8080);
    assert_eq!(config.school_api_url, "http://school.internal:9000");
    assert_eq!(config.role, Role::Teacher);
}

#[test]
fn junk_values_fall_back() {
    let config = AppConfig::from_vars(
        Some("eighty".to_owned()),
        Some("   ".to_owned()),
        Some("principal".to_owned()),
    );
    assert_eq!(config.port, 3000);
    assert_eq!(config.school_api_url, "http://localhost:4000");
    assert_eq!(config.role, Role::Admin);
}

#[test]
fn session_mirrors_config() {
    let config = AppConfig::from_vars(None, Some("http://b:1".to_owned()), Some("parent".to_owned()));
    let session = config.session();
    assert_eq!(session.api_base, "http://b:1");
    assert_eq!(session.role, Role::Parent);
    assert!(!session.can_manage());
}
