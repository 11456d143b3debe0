//! Search box above each list table. Filters the fetched rows client-side.

use leptos::prelude::*;

#[component]
pub fn TableSearch(query: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="table-search">
            <input
                class="table-search__input"
                type="text"
                placeholder="Search..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}
