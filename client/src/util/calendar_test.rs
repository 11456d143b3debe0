use super::*;

#[test]
fn january_2025_starts_on_wednesday_and_has_31_days() {
    let grid = month_grid(2025, Month::January);
    // 2025-01-01 is a Wednesday: two leading pads.
    assert_eq!(grid[0], [None, None, Some(1), Some(2), Some(3), Some(4), Some(5)]);
    let days: Vec<u8> = grid.iter().flatten().flatten().copied().collect();
    assert_eq!(days.len(), 31);
    assert_eq!(days.last(), Some(&31));
}

#[test]
fn february_leap_year_has_29_days() {
    let days: Vec<u8> =
        month_grid(2024, Month::February).iter().flatten().flatten().copied().collect();
    assert_eq!(days.len(), 29);
}

#[test]
fn date_key_is_zero_padded() {
    assert_eq!(date_key(2025, Month::March, 4), "2025-03-04");
    assert_eq!(date_key(2025, Month::December, 25), "2025-12-25");
}

#[test]
fn month_rolling_wraps_the_year() {
    assert_eq!(previous_month(2025, Month::January), (2024, Month::December));
    assert_eq!(next_month(2025, Month::December), (2026, Month::January));
    assert_eq!(next_month(2025, Month::June), (2025, Month::July));
}

#[test]
fn month_label_reads_naturally() {
    assert_eq!(month_label(2025, Month::January), "January 2025");
}
