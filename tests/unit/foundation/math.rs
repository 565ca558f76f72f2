use super::*;

#[test]
fn rescale_maps_endpoints() {
    assert_eq!(rescale((0.0, 1.0), (5.0, 15.0), 0.0), 5.0);
    assert_eq!(rescale((0.0, 1.0), (5.0, 15.0), 1.0), 15.0);
    assert_eq!(rescale((-1.2, 1.2), (0.0, 1.0), 0.0), 0.5);
}

#[test]
fn rescale_is_monotonic() {
    let mut prev = f64::NEG_INFINITY;
    for i in 0..=100 {
        let v = rescale((0.0, 1.0), (5.0, 15.0), f64::from(i) / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn rescale_extrapolates_and_handles_degenerate_input() {
    assert!(rescale((-1.2, 1.2), (0.0, 1.0), 1.5) > 1.0);
    assert_eq!(rescale((1.0, 1.0), (3.0, 9.0), 42.0), 3.0);
}

#[test]
fn linspace_includes_endpoints() {
    let xs = linspace(0.0, 1.0, 5);
    assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());

    let xs = linspace(0.0, 1.0, 7);
    assert_eq!(xs[6], 1.0);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn lerp_hits_both_ends() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}
