//! Week-schedule panel for a teacher or class.
//!
//! Fetches `/api/getEventsByType` and falls back to built-in sample
//! lessons when the backend is unreachable, so the schedule never renders
//! blank.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use leptos::prelude::*;
use records::datetime::{format_date, format_time};
#[cfg(feature = "hydrate")]
use records::endpoints;
use records::raw::RawScheduleEvent;

#[cfg(feature = "hydrate")]
use crate::state::session::backend_url;
use crate::state::session::use_session;

/// Sample lessons shown when the feed is unavailable.
#[must_use]
pub fn default_schedule() -> Vec<RawScheduleEvent> {
    [
        (1, "Math Class", "2025-01-10T09:00:00", "2025-01-10T10:00:00"),
        (2, "Science Class", "2025-01-10T11:00:00", "2025-01-10T12:00:00"),
        (3, "History Class", "2025-01-11T08:30:00", "2025-01-11T09:30:00"),
    ]
    .into_iter()
    .map(|(id, title, start, end)| RawScheduleEvent {
        id,
        title: title.to_owned(),
        start: start.to_owned(),
        end: end.to_owned(),
    })
    .collect()
}

/// One display line: `2025-01-10 · 09:00 - 10:00`.
fn time_span(event: &RawScheduleEvent) -> String {
    format!(
        "{} · {} - {}",
        format_date(&event.start),
        format_time(&event.start),
        format_time(&event.end)
    )
}

#[component]
pub fn SchedulePanel(scope: &'static str, id: String) -> impl IntoView {
    let session = use_session();
    let events = RwSignal::new(default_schedule());

    #[cfg(feature = "hydrate")]
    {
        let requested = RwSignal::new(false);
        let id = id.clone();
        Effect::new(move || {
            if requested.get() {
                return;
            }
            let state = session.get();
            if state.loading {
                return;
            }
            requested.set(true);
            let url = backend_url(&state.session, &endpoints::events_by_type(scope, &id));
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_json::<Vec<RawScheduleEvent>>(&url).await {
                    Ok(rows) if !rows.is_empty() => events.set(rows),
                    Ok(_) => {}
                    Err(err) => log::error!("schedule fetch failed: {err}"),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
    }

    view! {
        <div class="panel schedule-panel">
            <div class="panel__head">
                <h2 class="panel__title">"Schedule"</h2>
            </div>
            <div class="schedule-panel__items">
                {move || {
                    events
                        .get()
                        .into_iter()
                        .map(|event| {
                            let span = time_span(&event);
                            view! {
                                <div class="schedule-panel__item">
                                    <h3 class="schedule-panel__title">{event.title}</h3>
                                    <span class="schedule-panel__time">{span}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
