//! Events for one calendar day.
//!
//! Refetches whenever the selected day changes. Unlike the list pages this
//! widget does show its error state, since an empty day and a failed fetch
//! read very differently on a calendar.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use records::endpoints;
#[cfg(feature = "hydrate")]
use records::rows::project_event;
use records::rows::EventRow;

#[cfg(feature = "hydrate")]
use crate::state::session::backend_url;
use crate::state::session::use_session;

#[component]
pub fn EventList(date: RwSignal<Option<String>>) -> impl IntoView {
    let session = use_session();
    let events = RwSignal::new(Vec::<EventRow>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(day) = date.get() else {
                return;
            };
            let state = session.get();
            if state.loading {
                return;
            }
            loading.set(true);
            error.set(None);
            let url = backend_url(&state.session, &endpoints::events_by_date(&day));
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_rows(&url, project_event).await {
                    Ok(rows) => events.set(rows),
                    Err(err) => {
                        log::error!("events fetch failed: {err}");
                        error.set(Some(
                            "Failed to fetch events. Please try again later.".to_owned(),
                        ));
                    }
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
        <div class="event-list">
            {move || {
                if date.get().is_none() {
                    view! { <p class="event-list__hint">"Pick a date to see its events."</p> }
                        .into_any()
                } else if loading.get() {
                    view! { <p class="event-list__hint">"Loading events..."</p> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <p class="event-list__error">{message}</p> }.into_any()
                } else if events.get().is_empty() {
                    view! { <p class="event-list__hint">"No events for this date."</p> }.into_any()
                } else {
                    view! {
                        <div class="event-list__items">
                            {events
                                .get()
                                .into_iter()
                                .map(|event| {
                                    view! {
                                        <div class="event-list__item">
                                            <div class="event-list__row">
                                                <h3 class="event-list__title">{event.title}</h3>
                                                <span class="event-list__time">
                                                    {format!("{} - {}", event.start_time, event.end_time)}
                                                </span>
                                            </div>
                                            <p class="event-list__description">{event.description}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Calendar plus the event list it drives.
#[component]
pub fn EventCalendarContainer() -> impl IntoView {
    let selected = RwSignal::new(None::<String>);
    view! {
        <div class="panel event-panel">
            <crate::components::event_calendar::EventCalendar selected=selected/>
            <div class="panel__head">
                <h2 class="panel__title">"Events"</h2>
            </div>
            <EventList date=selected/>
        </div>
    }
}
