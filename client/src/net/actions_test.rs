use super::*;

#[test]
fn action_path_formats_segment_and_id() {
    assert_eq!(action_path("exam", 3), "/actions/exam/3");
    assert_eq!(action_path("announcement", 7), "/actions/announcement/7");
    assert_eq!(action_path("parent", 12), "/actions/parent/12");
}
