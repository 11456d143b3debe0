use super::*;

#[test]
fn default_schedule_has_three_sample_lessons() {
    let events = default_schedule();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].title, "Math Class");
}

#[test]
fn time_span_formats_date_and_both_times() {
    let event = &default_schedule()[0];
    assert_eq!(time_span(event), "2025-01-10 · 09:00 - 10:00");
}
