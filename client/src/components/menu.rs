//! Sidebar menu linking the dashboard pages, filtered by role.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;
use records::entity::EntityKind;
use records::session::Role;

use crate::state::session::use_session;

/// The list-page entries a role gets to see. Admin sees everything;
/// teachers lose the parent roster; students and parents only see their
/// own academic surfaces.
#[must_use]
pub fn entries_for(role: Role) -> Vec<EntityKind> {
    match role {
        Role::Admin => EntityKind::ALL.to_vec(),
        Role::Teacher => {
            EntityKind::ALL.iter().copied().filter(|k| *k != EntityKind::Parent).collect()
        }
        Role::Student | Role::Parent => vec![
            EntityKind::Exam,
            EntityKind::Assignment,
            EntityKind::Result,
            EntityKind::Attendance,
            EntityKind::Event,
            EntityKind::Announcement,
        ],
    }
}

#[component]
pub fn Menu() -> impl IntoView {
    let session = use_session();
    view! {
        <nav class="menu">
            <a class="menu__brand" href="/">
                "classboard"
            </a>
            <a class="menu__item" href="/">
                "Home"
            </a>
            {move || {
                entries_for(session.get().session.role)
                    .into_iter()
                    .map(|kind| {
                        let href = format!("/list/{}", kind.route_segment());
                        view! {
                            <a class="menu__item" href=href>
                                {kind.plural_label()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
