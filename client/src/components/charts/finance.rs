//! Income/expense line chart. The backend exposes no finance endpoint, so
//! the widget renders a fixed yearly sample.

#[cfg(test)]
#[path = "finance_test.rs"]
mod finance_test;

use leptos::prelude::*;

const VIEW_W: f64 = 600.0;
const VIEW_H: f64 = 260.0;
const PLOT_H: f64 = 220.0;

/// Month, income, expense.
pub const MONTHS: [(&str, i64, i64); 12] = [
    ("Jan", 4000, 2400),
    ("Feb", 5000, 3400),
    ("Mar", 6000, 4400),
    ("April", 2000, 1400),
    ("May", 8000, 5400),
    ("June", 9000, 3400),
    ("July", 10000, 6400),
    ("August", 12000, 7400),
    ("Sept", 13000, 9400),
    ("Oct", 15000, 5400),
    ("Nov", 15000, 8400),
    ("Dec", 16000, 3400),
];

/// `points` attribute of an SVG polyline for one series, scaled to the
/// plot box against `max`.
fn polyline_points(values: &[i64], max: i64) -> String {
    if values.is_empty() || max <= 0 {
        return String::new();
    }
    let step = if values.len() > 1 { VIEW_W / (values.len() - 1) as f64 } else { 0.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            #[allow(clippy::cast_precision_loss)]
            let y = PLOT_H - (*v as f64 / max as f64 * PLOT_H);
            format!("{:.1},{y:.1}", i as f64 * step)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn FinanceChart() -> impl IntoView {
    let income: Vec<i64> = MONTHS.iter().map(|(_, inc, _)| *inc).collect();
    let expense: Vec<i64> = MONTHS.iter().map(|(_, _, exp)| *exp).collect();
    let max = income.iter().chain(&expense).copied().max().unwrap_or(1);

    let income_points = polyline_points(&income, max);
    let expense_points = polyline_points(&expense, max);

    view! {
        <div class="panel finance-panel">
            <div class="panel__head">
                <h2 class="panel__title">"Finance"</h2>
            </div>
            <svg
                class="finance-chart"
                viewBox=format!("0 0 {VIEW_W} {VIEW_H}")
                role="img"
                aria-label="Income and expense by month"
            >
                <polyline class="finance-chart__line finance-chart__line--income" points=income_points/>
                <polyline
                    class="finance-chart__line finance-chart__line--expense"
                    points=expense_points
                />
            </svg>
            <div class="finance-chart__legend">
                <span class="finance-chart__key finance-chart__key--income">"income"</span>
                <span class="finance-chart__key finance-chart__key--expense">"expense"</span>
            </div>
        </div>
    }
}
