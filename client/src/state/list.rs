//! Remote-collection state shared by every list page.
//!
//! DESIGN
//! ======
//! Each list page used to hand-roll the same fetch/loading/rows triple.
//! `RemoteList` is that triple as one value: rows plus a loading flag that
//! is set on mount and cleared when the fetch settles, success or not. A
//! failed fetch leaves the rows empty; the error goes to the console, not
//! the user.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use leptos::prelude::*;

/// Reactive state for one fetched collection.
#[derive(Debug)]
pub struct RemoteList<Row: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<Row>>,
    pub loading: RwSignal<bool>,
}

// Derived Clone/Copy would demand `Row: Copy`; the signal handles are
// copyable for any row type.
impl<Row: Send + Sync + 'static> Clone for RemoteList<Row> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Row: Send + Sync + 'static> Copy for RemoteList<Row> {}

impl<Row: Clone + Send + Sync + 'static> RemoteList<Row> {
    /// Fresh list in the loading state, as a just-mounted page starts.
    #[must_use]
    pub fn new() -> Self {
        Self { rows: RwSignal::new(Vec::new()), loading: RwSignal::new(true) }
    }

    /// Fetch settled with data.
    pub fn resolve(&self, rows: Vec<Row>) {
        self.rows.set(rows);
        self.loading.set(false);
    }

    /// Fetch settled without data; the table stays empty.
    pub fn resolve_empty(&self) {
        self.loading.set(false);
    }
}

impl<Row: Clone + Send + Sync + 'static> Default for RemoteList<Row> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the collection for `kind` once the session has settled, projecting
/// each raw record into its view row. Runs once per page instance; a failed
/// fetch logs to the console and resolves the list empty.
pub fn load_when_ready<Raw, Row>(
    list: RemoteList<Row>,
    kind: records::entity::EntityKind,
    project: fn(Raw) -> Row,
) where
    Raw: serde::de::DeserializeOwned + 'static,
    Row: Clone + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use crate::state::session::{backend_url, use_session};

        let session = use_session();
        let requested = RwSignal::new(false);
        Effect::new(move || {
            if requested.get() {
                return;
            }
            let state = session.get();
            if state.loading {
                return;
            }
            requested.set(true);
            let url = backend_url(&state.session, records::endpoints::get_all(kind));
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_rows(&url, project).await {
                    Ok(rows) => list.resolve(rows),
                    Err(err) => {
                        log::error!("failed to fetch {}: {err}", kind.table_name());
                        list.resolve_empty();
                    }
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (list, kind, project);
    }
}
