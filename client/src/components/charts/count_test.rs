use super::*;

#[test]
fn arc_length_splits_the_ring_by_share() {
    let count = GenderCount { boys: 1, girls: 1 };
    let half = circumference() / 2.0;
    assert!((arc_length(count, count.boys) - half).abs() < 1e-9);
}

#[test]
fn empty_school_draws_no_arcs() {
    let count = GenderCount::default();
    assert!(arc_length(count, count.boys).abs() < f64::EPSILON);
    assert!(arc_length(count, count.girls).abs() < f64::EPSILON);
}
