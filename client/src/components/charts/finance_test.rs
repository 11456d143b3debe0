use super::*;

#[test]
fn sample_year_has_twelve_months() {
    assert_eq!(MONTHS.len(), 12);
    assert_eq!(MONTHS[0].0, "Jan");
    assert_eq!(MONTHS[11], ("Dec", 16000, 3400));
}

#[test]
fn polyline_spans_the_plot_box() {
    let points = polyline_points(&[0, 10], 10);
    // First point bottom-left, second point top-right.
    assert_eq!(points, format!("0.0,{PLOT_H:.1} {VIEW_W:.1},0.0"));
}

#[test]
fn degenerate_inputs_yield_no_points() {
    assert_eq!(polyline_points(&[], 10), "");
    assert_eq!(polyline_points(&[1, 2], 0), "");
}
