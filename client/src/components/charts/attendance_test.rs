use super::*;

#[test]
fn default_buckets_cover_four_days() {
    let data = default_buckets();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0].name, "2025-01-01");
    assert_eq!(data[1].present, 1);
}

#[test]
fn max_count_takes_the_taller_series_and_never_zero() {
    let data = vec![
        AttendanceBucket { name: "d1".to_owned(), present: 3, absent: 9 },
        AttendanceBucket { name: "d2".to_owned(), present: 5, absent: 2 },
    ];
    assert_eq!(max_count(&data), 9);
    assert_eq!(max_count(&[]), 1);
}

#[test]
fn bar_height_scales_linearly_and_clamps_negatives() {
    assert!((bar_height(9, 9) - PLOT_H).abs() < f64::EPSILON);
    assert!((bar_height(3, 9) - PLOT_H / 3.0).abs() < 1e-9);
    assert!((bar_height(0, 9)).abs() < f64::EPSILON);
    assert!((bar_height(-2, 9)).abs() < f64::EPSILON);
}
