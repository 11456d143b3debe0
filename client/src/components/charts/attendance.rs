//! Present/absent grouped bar chart for the admin overview.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use records::endpoints;
#[cfg(feature = "hydrate")]
use records::raw::RawAttendanceChart;
use records::rows::AttendanceBucket;

#[cfg(feature = "hydrate")]
use crate::state::session::backend_url;
use crate::state::session::use_session;

const VIEW_W: f64 = 360.0;
const VIEW_H: f64 = 220.0;
const PLOT_H: f64 = 180.0;
const GROUP_PAD: f64 = 12.0;

/// Sample week shown until (or instead of) real data.
#[must_use]
pub fn default_buckets() -> Vec<AttendanceBucket> {
    [
        ("2025-01-01", 0, 1),
        ("2025-01-02", 1, 0),
        ("2025-01-03", 0, 1),
        ("2025-01-04", 1, 0),
    ]
    .into_iter()
    .map(|(name, present, absent)| AttendanceBucket {
        name: name.to_owned(),
        present,
        absent,
    })
    .collect()
}

/// Tallest count across both series, at least 1 so bars always scale.
fn max_count(data: &[AttendanceBucket]) -> i64 {
    data.iter().map(|b| b.present.max(b.absent)).max().unwrap_or(0).max(1)
}

/// Pixel height of one bar.
fn bar_height(value: i64, max: i64) -> f64 {
    if value <= 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    {
        value as f64 / max as f64 * PLOT_H
    }
}

/// One bar of the chart, so present and absent rects share a view type.
fn bar(class: &'static str, x: f64, height: f64, width: f64) -> impl IntoView {
    view! {
        <rect
            class=class
            x=format!("{x:.1}")
            y=format!("{:.1}", PLOT_H - height)
            width=format!("{width:.1}")
            height=format!("{height:.1}")
        />
    }
}

/// Presentational bar chart.
#[component]
pub fn AttendanceChart(data: Vec<AttendanceBucket>) -> impl IntoView {
    let max = max_count(&data);
    let group_w = (VIEW_W - GROUP_PAD * 2.0) / data.len().max(1) as f64;
    let bar_w = (group_w / 2.0 - 4.0).max(4.0);

    let bars = data
        .iter()
        .enumerate()
        .flat_map(|(i, bucket)| {
            let x0 = GROUP_PAD + i as f64 * group_w;
            [
                bar(
                    "attendance-chart__bar attendance-chart__bar--present",
                    x0,
                    bar_height(bucket.present, max),
                    bar_w,
                ),
                bar(
                    "attendance-chart__bar attendance-chart__bar--absent",
                    x0 + bar_w + 4.0,
                    bar_height(bucket.absent, max),
                    bar_w,
                ),
            ]
        })
        .collect::<Vec<_>>();

    let labels = data
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let x = GROUP_PAD + i as f64 * group_w + group_w / 2.0;
            let label = bucket.name.clone();
            view! {
                <text
                    class="attendance-chart__label"
                    x=format!("{x:.1}")
                    y=format!("{:.1}", PLOT_H + 16.0)
                    text-anchor="middle"
                >
                    {label}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            class="attendance-chart"
            viewBox=format!("0 0 {VIEW_W} {VIEW_H}")
            role="img"
            aria-label="Attendance by day"
        >
            {bars}
            {labels}
        </svg>
    }
}

/// Fetches the attendance aggregate, falling back to the sample week.
#[component]
pub fn AttendanceChartContainer() -> impl IntoView {
    let session = use_session();
    let data = RwSignal::new(default_buckets());

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
            let url = backend_url(&state.session, endpoints::CHART_ATTENDANCE);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_json::<RawAttendanceChart>(&url).await {
                    Ok(chart) => {
                        let buckets: Vec<AttendanceBucket> = chart
                            .data
                            .unwrap_or_default()
                            .into_iter()
                            .map(Into::into)
                            .collect();
                        if !buckets.is_empty() {
                            data.set(buckets);
                        }
                    }
                    Err(err) => {
                        log::error!("attendance chart fetch failed: {err}");
                    }
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }

    view! {
        <div class="panel attendance-panel">
            <div class="panel__head">
                <h2 class="panel__title">"Attendance"</h2>
            </div>
            {move || view! { <AttendanceChart data=data.get()/> }}
        </div>
    }
}
