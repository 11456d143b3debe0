//! Shared frame around every entity list page.
//!
//! DESIGN
//! ======
//! Heading, search box, filter/sort affordances, the role-gated create
//! button, and the pagination stub are identical across entities; only the
//! table inside differs. Pages pass the rendered table as children.

use leptos::prelude::*;
use records::entity::EntityKind;

use crate::components::form_modal::{FormModal, ModalIntent};
use crate::components::pagination::Pagination;
use crate::components::table_search::TableSearch;
use crate::state::session::use_session;

#[component]
pub fn ListScaffold(
    kind: EntityKind,
    query: RwSignal<String>,
    loading: RwSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let can_manage = move || session.get().can_manage();

    view! {
        <div class="list-page">
            <div class="list-page__top">
                <h1 class="list-page__heading">{format!("All {}", kind.plural_label())}</h1>
                <div class="list-page__controls">
                    <TableSearch query=query/>
                    <button class="btn list-page__filter" title="Filter">"Filter"</button>
                    <button class="btn list-page__sort" title="Sort">"Sort"</button>
                    <Show when=can_manage>
                        <FormModal intent=ModalIntent::Create(kind)/>
                    </Show>
                </div>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="list-page__loading">"Loading..."</p> }
            >
                {children()}
            </Show>
            <Pagination/>
        </div>
    }
}
