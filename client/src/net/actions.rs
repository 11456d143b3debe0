//! The shared action layer: update/delete for exam, announcement, parent.
//!
//! SYSTEM CONTEXT
//! ==============
//! These three entities mutate through this app's own server (`/actions/...`),
//! which relays to the school backend and always answers with the uniform
//! `{success, message}` shape. The other ten entities post to the backend
//! directly from their forms via `net::api`.
//!
//! ERROR HANDLING
//! ==============
//! An action never surfaces a raw error: transport and decode failures
//! collapse into `ActionResult::err` so callers can show one banner either
//! way.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use records::forms::announcement::AnnouncementPayload;
use records::forms::exam::ExamPayload;
use records::forms::parent::ParentPayload;
use records::result::ActionResult;

#[cfg(any(test, feature = "hydrate"))]
fn action_path(segment: &str, id: i64) -> String {
    format!("/actions/{segment}/{id}")
}

#[cfg(feature = "hydrate")]
async fn run_update<T: serde::Serialize>(segment: &str, id: i64, payload: &T) -> ActionResult {
    let request = match gloo_net::http::Request::put(&action_path(segment, id)).json(payload) {
        Ok(req) => req,
        Err(e) => return ActionResult::err(e.to_string()),
    };
    settle(request.send().await).await
}

#[cfg(feature = "hydrate")]
async fn run_delete(segment: &str, id: i64) -> ActionResult {
    settle(gloo_net::http::Request::delete(&action_path(segment, id)).send().await).await
}

/// Collapse a relay response into the uniform result. The server replies
/// 200 with an `ActionResult` body for both outcomes; anything else here is
/// a transport problem.
#[cfg(feature = "hydrate")]
async fn settle(
    response: Result<gloo_net::http::Response, gloo_net::Error>,
) -> ActionResult {
    let resp = match response {
        Ok(resp) => resp,
        Err(e) => return ActionResult::err(e.to_string()),
    };
    match resp.json::<ActionResult>().await {
        Ok(result) => result,
        Err(_) => ActionResult::err("No response received from the server."),
    }
}

#[cfg(not(feature = "hydrate"))]
async fn run_update<T: serde::Serialize>(segment: &str, id: i64, payload: &T) -> ActionResult {
    let _ = (segment, id, payload);
    ActionResult::err("not available on server")
}

#[cfg(not(feature = "hydrate"))]
async fn run_delete(segment: &str, id: i64) -> ActionResult {
    let _ = (segment, id);
    ActionResult::err("not available on server")
}

pub async fn update_exam(id: i64, payload: &ExamPayload) -> ActionResult {
    run_update("exam", id, payload).await
}

pub async fn delete_exam(id: i64) -> ActionResult {
    run_delete("exam", id).await
}

pub async fn update_announcement(id: i64, payload: &AnnouncementPayload) -> ActionResult {
    run_update("announcement", id, payload).await
}

pub async fn delete_announcement(id: i64) -> ActionResult {
    run_delete("announcement", id).await
}

pub async fn update_parent(id: i64, payload: &ParentPayload) -> ActionResult {
    run_update("parent", id, payload).await
}

pub async fn delete_parent(id: i64) -> ActionResult {
    run_delete("parent", id).await
}
