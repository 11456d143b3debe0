//! Latest announcements widget for the overview pages.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use records::endpoints;
#[cfg(feature = "hydrate")]
use records::entity::EntityKind;
#[cfg(feature = "hydrate")]
use records::rows::project_announcement;
use records::rows::AnnouncementRow;

#[cfg(feature = "hydrate")]
use crate::state::session::backend_url;
use crate::state::session::use_session;

#[component]
pub fn Announcements() -> impl IntoView {
    let session = use_session();
    let items = RwSignal::new(Vec::<AnnouncementRow>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
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
            let url = backend_url(&state.session, endpoints::get_all(EntityKind::Announcement));
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_rows(&url, project_announcement).await {
                    Ok(rows) => items.set(rows),
                    Err(err) => log::error!("announcements fetch failed: {err}"),
                }
                loading.set(false);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }

    view! {
        <div class="panel announcements-panel">
            <div class="panel__head">
                <h2 class="panel__title">"Announcements"</h2>
                <a class="panel__more" href="/list/announcements">
                    "View All"
                </a>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="announcements-panel__hint">"Loading..."</p> }
            >
                <div class="announcements-panel__items">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .take(5)
                            .map(|item| {
                                view! {
                                    <div class="announcements-panel__item">
                                        <div class="announcements-panel__row">
                                            <h3 class="announcements-panel__title">{item.title}</h3>
                                            <span class="announcements-panel__date">{item.date}</span>
                                        </div>
                                        <p class="announcements-panel__description">
                                            {item.description}
                                        </p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
