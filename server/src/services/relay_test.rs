use super::*;

#[test]
fn success_messages_match_the_action_contract() {
    assert_eq!(
        success_message(EntityKind::Exam, ActionVerb::Update),
        "Exam updated successfully!"
    );
    assert_eq!(
        success_message(EntityKind::Announcement, ActionVerb::Delete),
        "Announcement deleted successfully!"
    );
    assert_eq!(
        success_message(EntityKind::Parent, ActionVerb::Update),
        "Parent updated successfully!"
    );
}

#[test]
fn fallbacks_name_verb_and_table() {
    assert_eq!(failure_fallback(EntityKind::Exam, ActionVerb::Delete), "Failed to delete exam");
    assert_eq!(
        failure_fallback(EntityKind::Announcement, ActionVerb::Update),
        "Failed to update announcement"
    );
}

#[test]
fn settle_accepts_any_2xx() {
    let result = settle(EntityKind::Exam, ActionVerb::Update, 200, "");
    assert_eq!(result, ActionResult::ok("Exam updated successfully!"));
    let created = settle(EntityKind::Exam, ActionVerb::Update, 204, "");
    assert!(created.success);
}

#[test]
fn settle_reads_the_backend_message_on_failure() {
    let result = settle(
        EntityKind::Announcement,
        ActionVerb::Delete,
        404,
        r#"{"message":"not found"}"#,
    );
    assert_eq!(result, ActionResult::err("not found"));
}

#[test]
fn settle_uses_the_fallback_for_opaque_bodies() {
    let result = settle(EntityKind::Parent, ActionVerb::Delete, 502, "<html></html>");
    assert_eq!(result, ActionResult::err("Failed to delete parent"));
}
