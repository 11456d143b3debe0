//! Month calendar driving the event list.

use leptos::prelude::*;
use time::Month;

use crate::util::calendar::{date_key, month_grid, month_label, next_month, previous_month};

/// Today's (year, month, day) in the browser, or a fixed anchor on the
/// server so SSR output is deterministic.
fn today() -> (i32, Month, u8) {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = now.get_full_year() as i32;
        let month_idx = now.get_month() as u8 + 1;
        let month = Month::try_from(month_idx).unwrap_or(Month::January);
        let day = now.get_date() as u8;
        (year, month, day)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (2025, Month::January, 1)
    }
}

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Month grid with selectable days. Selecting a day writes its
/// `YYYY-MM-DD` key into `selected`.
#[component]
pub fn EventCalendar(selected: RwSignal<Option<String>>) -> impl IntoView {
    let (init_year, init_month, _) = today();
    let year = RwSignal::new(init_year);
    let month = RwSignal::new(init_month);

    let on_prev = move |_| {
        let (y, m) = previous_month(year.get(), month.get());
        year.set(y);
        month.set(m);
    };
    let on_next = move |_| {
        let (y, m) = next_month(year.get(), month.get());
        year.set(y);
        month.set(m);
    };

    view! {
        <div class="event-calendar">
            <div class="event-calendar__head">
                <button class="btn event-calendar__nav" on:click=on_prev>
                    "<"
                </button>
                <span class="event-calendar__title">
                    {move || month_label(year.get(), month.get())}
                </span>
                <button class="btn event-calendar__nav" on:click=on_next>
                    ">"
                </button>
            </div>
            <div class="event-calendar__weekdays">
                {WEEKDAYS
                    .iter()
                    .map(|d| view! { <span class="event-calendar__weekday">{*d}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="event-calendar__grid">
                {move || {
                    month_grid(year.get(), month.get())
                        .into_iter()
                        .flatten()
                        .map(|cell| match cell {
                            Some(day) => {
                                let key = date_key(year.get(), month.get(), day);
                                let key_for_class = key.clone();
                                view! {
                                    <button
                                        class="event-calendar__day"
                                        class:event-calendar__day--selected=move || {
                                            selected.get().as_deref() == Some(key_for_class.as_str())
                                        }
                                        on:click=move |_| selected.set(Some(key.clone()))
                                    >
                                        {day}
                                    </button>
                                }
                                    .into_any()
                            }
                            None => view! { <span class="event-calendar__pad"></span> }.into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
