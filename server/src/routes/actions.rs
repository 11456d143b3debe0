//! Action endpoints: thin handlers over the relay service.
//!
//! Each handler answers 200 with an `ActionResult` body for every outcome;
//! failure lives in the payload, not the status, so the client consumes
//! one shape.

use axum::extract::{Path, State};
use axum::response::Json;
use records::entity::EntityKind;
use records::result::ActionResult;

use crate::services::relay;
use crate::state::AppState;

/// `PUT /actions/exam/:id` — relay an exam update.
pub async fn update_exam(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<serde_json::Value>,
) -> Json<ActionResult> {
    Json(relay::relay_update(&state, EntityKind::Exam, id, payload).await)
}

/// `DELETE /actions/exam/:id` — relay an exam delete.
pub async fn delete_exam(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<ActionResult> {
    Json(relay::relay_delete(&state, EntityKind::Exam, id).await)
}

/// `PUT /actions/announcement/:id` — relay an announcement update.
pub async fn update_announcement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<serde_json::Value>,
) -> Json<ActionResult> {
    Json(relay::relay_update(&state, EntityKind::Announcement, id, payload).await)
}

/// `DELETE /actions/announcement/:id` — relay an announcement delete.
pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<ActionResult> {
    Json(relay::relay_delete(&state, EntityKind::Announcement, id).await)
}

/// `PUT /actions/parent/:id` — relay a parent update.
pub async fn update_parent(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<serde_json::Value>,
) -> Json<ActionResult> {
    Json(relay::relay_update(&state, EntityKind::Parent, id, payload).await)
}

/// `DELETE /actions/parent/:id` — relay a parent delete.
pub async fn delete_parent(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<ActionResult> {
    Json(relay::relay_delete(&state, EntityKind::Parent, id).await)
}
