use super::*;

#[test]
fn rfc3339_instant_formats_both_parts() {
    assert_eq!(format_date("2025-01-10T09:00:00Z"), "2025-01-10");
    assert_eq!(format_time("2025-01-10T09:00:00Z"), "09:00");
}

#[test]
fn naive_timestamp_formats_both_parts() {
    assert_eq!(format_date("2025-03-04T13:45:00"), "2025-03-04");
    assert_eq!(format_time("2025-03-04T13:45:00"), "13:45");
}

#[test]
fn bare_date_keeps_date_and_passes_time_through() {
    assert_eq!(format_date("2025-06-01"), "2025-06-01");
    assert_eq!(format_time("2025-06-01"), "2025-06-01");
}

#[test]
fn garbage_passes_through_verbatim() {
    assert_eq!(format_date("soon"), "soon");
    assert_eq!(format_time(""), "");
}

#[test]
fn offset_instants_are_accepted() {
    assert_eq!(format_date("2025-01-10T09:00:00+02:00"), "2025-01-10");
    assert_eq!(format_time("2025-01-10T09:30:00+02:00"), "09:30");
}
