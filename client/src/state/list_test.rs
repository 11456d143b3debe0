#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn new_list_is_loading_and_empty() {
    let list = RemoteList::<String>::new();
    assert!(list.loading.get_untracked());
    assert!(list.rows.get_untracked().is_empty());
}

#[test]
fn resolve_stores_rows_and_clears_loading() {
    let list = RemoteList::<String>::new();
    list.resolve(vec!["a".to_owned(), "b".to_owned()]);
    assert!(!list.loading.get_untracked());
    assert_eq!(list.rows.get_untracked().len(), 2);
}

#[test]
fn resolve_empty_clears_loading_but_keeps_table_empty() {
    let list = RemoteList::<String>::new();
    list.resolve_empty();
    assert!(!list.loading.get_untracked());
    assert!(list.rows.get_untracked().is_empty());
}
