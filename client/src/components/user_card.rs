//! Headline stat cards on the admin overview.
//!
//! Display-only: the backend exposes no per-role count endpoints, so the
//! cards show placeholder figures the way the pagination stub shows
//! placeholder pages.

use leptos::prelude::*;

#[component]
pub fn UserCard(label: &'static str, #[prop(default = "-")] value: &'static str) -> impl IntoView {
    view! {
        <div class="user-card">
            <span class="user-card__badge">"2024/25"</span>
            <h2 class="user-card__value">{value}</h2>
            <p class="user-card__label">{label}</p>
        </div>
    }
}
