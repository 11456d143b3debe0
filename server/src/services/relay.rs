//! Action relay: update/delete for exam, announcement, parent.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the dashboard's server-side actions. Each relays one HTTP
//! call (PUT or DELETE) to the school backend and normalizes every outcome
//! (success, backend rejection, transport failure) into the uniform
//! `ActionResult {success, message}` shape. Callers never see an error
//! type; the result is the contract.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use records::endpoints;
use records::entity::EntityKind;
use records::result::{ActionResult, error_message_from_body};
use tracing::warn;

use crate::state::AppState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionVerb {
    Update,
    Delete,
}

impl ActionVerb {
    fn as_str(self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Capitalized label for the three action-backed entities.
fn entity_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Exam => "Exam",
        EntityKind::Announcement => "Announcement",
        EntityKind::Parent => "Parent",
        _ => "Record",
    }
}

/// "Exam updated successfully!" and friends.
fn success_message(kind: EntityKind, verb: ActionVerb) -> String {
    let done = match verb {
        ActionVerb::Update => "updated",
        ActionVerb::Delete => "deleted",
    };
    format!("{} {done} successfully!", entity_label(kind))
}

/// "Failed to update exam" and friends, used when the backend's error body
/// carries no message of its own.
fn failure_fallback(kind: EntityKind, verb: ActionVerb) -> String {
    format!("Failed to {} {}", verb.as_str(), kind.table_name())
}

/// Normalize a backend response into the uniform result.
fn settle(kind: EntityKind, verb: ActionVerb, status: u16, body: &str) -> ActionResult {
    if (200..300).contains(&status) {
        ActionResult::ok(success_message(kind, verb))
    } else {
        ActionResult::err(error_message_from_body(body, &failure_fallback(kind, verb)))
    }
}

/// Relay an update: PUT the payload to `/api/update<Entity>/<id>`.
pub async fn relay_update(
    state: &AppState,
    kind: EntityKind,
    id: i64,
    payload: serde_json::Value,
) -> ActionResult {
    let url = endpoints::join(&state.config.school_api_url, &endpoints::update(kind, id));
    let response = state.http.put(&url).json(&payload).send().await;
    match response {
        Ok(resp) => {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            settle(kind, ActionVerb::Update, status, &body)
        }
        Err(err) => {
            warn!(kind = kind.table_name(), %err, "update relay failed");
            ActionResult::err(err.to_string())
        }
    }
}

/// Relay a delete: DELETE `/api/delete<Entity>/<id>`.
pub async fn relay_delete(state: &AppState, kind: EntityKind, id: i64) -> ActionResult {
    let url = endpoints::join(&state.config.school_api_url, &endpoints::delete(kind, id));
    let response = state.http.delete(&url).send().await;
    match response {
        Ok(resp) => {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            settle(kind, ActionVerb::Delete, status, &body)
        }
        Err(err) => {
            warn!(kind = kind.table_name(), %err, "delete relay failed");
            ActionResult::err(err.to_string())
        }
    }
}
