//! Pagination control under each table.
//!
//! Display-only: the backend's collection endpoints take no page or offset
//! parameters, so the buttons render disabled.

use leptos::prelude::*;

#[component]
pub fn Pagination() -> impl IntoView {
    view! {
        <div class="pagination">
            <button class="btn pagination__prev" disabled=true>
                "Prev"
            </button>
            <div class="pagination__pages">
                <button class="pagination__page pagination__page--current">"1"</button>
                <button class="pagination__page" disabled=true>"2"</button>
                <button class="pagination__page" disabled=true>"3"</button>
            </div>
            <button class="btn pagination__next" disabled=true>
                "Next"
            </button>
        </div>
    }
}
