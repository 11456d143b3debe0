use super::*;

fn names() -> Vec<String> {
    vec!["Ada Lovelace".to_owned(), "Alan Turing".to_owned(), "Grace Hopper".to_owned()]
}

#[test]
fn empty_query_keeps_everything() {
    assert_eq!(filter_rows(&names(), "", |r| r.clone()).len(), 3);
    assert_eq!(filter_rows(&names(), "   ", |r| r.clone()).len(), 3);
}

#[test]
fn match_is_case_insensitive_substring() {
    let hits = filter_rows(&names(), "LOVE", |r| r.clone());
    assert_eq!(hits, vec!["Ada Lovelace".to_owned()]);
}

#[test]
fn no_match_yields_empty() {
    assert!(filter_rows(&names(), "curie", |r| r.clone()).is_empty());
}

#[test]
fn order_is_preserved() {
    let hits = filter_rows(&names(), "a", |r| r.clone());
    assert_eq!(hits, names());
}
