//! Session context: role and backend base address.
//!
//! DESIGN
//! ======
//! The server hands the client its role and the school-backend address via
//! `GET /api/session` during hydration. Until that answer lands the state
//! is `loading` with sensible defaults, so SSR output stays deterministic
//! and list pages can defer their first fetch until the real base address
//! is known.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use records::session::Session;

/// Shared session state. `loading` clears once `/api/session` settles,
/// whether or not it succeeded.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub session: Session,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: Session::default(), loading: true }
    }
}

impl SessionState {
    /// Whether edit/delete chrome should render.
    #[must_use]
    pub fn can_manage(&self) -> bool {
        self.session.can_manage()
    }
}

/// Install the session signal at the application root.
pub fn provide_session() -> RwSignal<SessionState> {
    let state = RwSignal::new(SessionState::default());
    provide_context(state);
    state
}

/// Read the session signal anywhere below the root.
pub fn use_session() -> RwSignal<SessionState> {
    expect_context::<RwSignal<SessionState>>()
}

/// Absolute backend URL for an API path, against the session base address.
#[must_use]
pub fn backend_url(session: &Session, path: &str) -> String {
    records::endpoints::join(&session.api_base, path)
}
