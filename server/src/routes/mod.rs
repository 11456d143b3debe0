//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the session/action API with Leptos SSR rendering
//! under a single Axum router. Static client assets (WASM, CSS) are served
//! from `/pkg`.

pub mod actions;

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Session + action API routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/session", get(session))
        .route(
            "/actions/exam/{id}",
            axum::routing::put(actions::update_exam).delete(actions::delete_exam),
        )
        .route(
            "/actions/announcement/{id}",
            axum::routing::put(actions::update_announcement)
                .delete(actions::delete_announcement),
        )
        .route(
            "/actions/parent/{id}",
            axum::routing::put(actions::update_parent).delete(actions::delete_parent),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /api/session` — the role and backend address for this deployment.
async fn session(State(state): State<AppState>) -> Json<records::session::Session> {
    Json(state.config.session())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Full application: API routes + Leptos SSR + static assets at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// or malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}
