use super::*;

#[test]
fn required_rejects_whitespace_only() {
    assert!(required("  ", "Name is required").is_err());
    assert_eq!(required("", "Name is required").unwrap_err(), "Name is required");
    assert!(required("x", "Name is required").is_ok());
}

#[test]
fn length_enforces_both_bounds() {
    assert_eq!(length("ab", 3, 20, "too short", "too long").unwrap_err(), "too short");
    assert_eq!(
        length(&"x".repeat(21), 3, 20, "too short", "too long").unwrap_err(),
        "too long"
    );
    assert!(length("alice", 3, 20, "too short", "too long").is_ok());
}

#[test]
fn email_accepts_plain_addresses() {
    assert!(email("ada@school.test", "bad").is_ok());
    assert!(email("a.b@x.co.uk", "bad").is_ok());
}

#[test]
fn email_rejects_obvious_junk() {
    for bad in ["", "nope", "@x.com", "a@", "a@nodot", "a b@x.com", "a@.com", "a@com."] {
        assert!(email(bad, "Invalid email address!").is_err(), "accepted {bad:?}");
    }
}

#[test]
fn optional_passes_empty_and_applies_rule_otherwise() {
    assert!(optional("", |v| email(v, "bad")).is_ok());
    assert!(optional("nope", |v| email(v, "bad")).is_err());
    assert!(optional("ada@school.test", |v| email(v, "bad")).is_ok());
}

#[test]
fn int_at_least_distinguishes_range_from_parse_failures() {
    assert_eq!(int_at_least("25", 1, "small", "nan").unwrap(), 25);
    assert_eq!(int_at_least("-5", 1, "Capacity must be at least 1", "nan").unwrap_err(), "Capacity must be at least 1");
    assert_eq!(int_at_least("0", 1, "small", "nan").unwrap_err(), "small");
    assert_eq!(int_at_least("abc", 1, "small", "Capacity must be a valid number").unwrap_err(), "Capacity must be a valid number");
    assert_eq!(int_at_least("", 1, "small", "nan").unwrap_err(), "small");
}

#[test]
fn number_rejects_non_numeric() {
    assert!(number("87.5", "req", "nan").is_ok());
    assert_eq!(number("", "Score is required", "nan").unwrap_err(), "Score is required");
    assert_eq!(number("high", "req", "Score must be a valid number!").unwrap_err(), "Score must be a valid number!");
}
