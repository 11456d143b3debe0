//! Boys/girls radial count chart for the admin overview.

#[cfg(test)]
#[path = "count_test.rs"]
mod count_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use records::endpoints;
#[cfg(feature = "hydrate")]
use records::raw::RawSexCount;
use records::rows::GenderCount;

#[cfg(feature = "hydrate")]
use crate::state::session::backend_url;
use crate::state::session::use_session;

const RADIUS: f64 = 70.0;

/// Circumference of the donut ring.
fn circumference() -> f64 {
    2.0 * std::f64::consts::PI * RADIUS
}

/// `stroke-dasharray` prefix for one bucket's share of the ring.
fn arc_length(count: GenderCount, bucket: i64) -> f64 {
    count.percent(bucket) / 100.0 * circumference()
}

/// Presentational donut plus the percentage legend.
#[component]
pub fn CountChart(count: GenderCount) -> impl IntoView {
    let circ = circumference();
    let boys_arc = arc_length(count, count.boys);
    let girls_arc = arc_length(count, count.girls);

    view! {
        <svg class="count-chart" viewBox="0 0 200 200" role="img" aria-label="Students by sex">
            <circle class="count-chart__track" cx="100" cy="100" r=format!("{RADIUS}")/>
            <circle
                class="count-chart__arc count-chart__arc--boys"
                cx="100"
                cy="100"
                r=format!("{RADIUS}")
                stroke-dasharray=format!("{boys_arc:.2} {circ:.2}")
            />
            <circle
                class="count-chart__arc count-chart__arc--girls"
                cx="100"
                cy="100"
                r=format!("{RADIUS}")
                stroke-dasharray=format!("{girls_arc:.2} {circ:.2}")
                stroke-dashoffset=format!("{:.2}", -boys_arc)
            />
        </svg>
        <div class="count-chart__legend">
            <div class="count-chart__entry count-chart__entry--boys">
                <strong>{count.boys}</strong>
                <span>{format!("Boys ({:.1}%)", count.percent(count.boys))}</span>
            </div>
            <div class="count-chart__entry count-chart__entry--girls">
                <strong>{count.girls}</strong>
                <span>{format!("Girls ({:.1}%)", count.percent(count.girls))}</span>
            </div>
        </div>
    }
}

/// Fetches the students-count aggregate; missing buckets count zero.
#[component]
pub fn CountChartContainer() -> impl IntoView {
    let session = use_session();
    let count = RwSignal::new(GenderCount::default());

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
            let url = backend_url(&state.session, endpoints::STUDENTS_COUNT);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_json::<Vec<RawSexCount>>(&url).await {
                    Ok(rows) => count.set(GenderCount::from_counts(&rows)),
                    Err(err) => log::error!("students count fetch failed: {err}"),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }

    view! {
        <div class="panel count-panel">
            <div class="panel__head">
                <h2 class="panel__title">"Students"</h2>
            </div>
            {move || view! { <CountChart count=count.get()/> }}
        </div>
    }
}
