use super::*;

fn pts(xs: &[f64], ys: &[f64]) -> Vec<(f64, Value)> {
    xs.iter()
        .zip(ys)
        .map(|(x, y)| (*x, Value::Scalar(*y)))
        .collect()
}

fn scalar(v: Value) -> f64 {
    v.as_scalar().unwrap()
}

#[test]
fn linear_passes_through_endpoints() {
    let interp = Interpolator::new(&pts(&[0.0, 1.0], &[0.1, 0.3]), InterpMode::Linear).unwrap();
    assert_eq!(scalar(interp.eval(0.0)), 0.1);
    assert_eq!(scalar(interp.eval(1.0)), 0.3);
    assert!((scalar(interp.eval(0.5)) - 0.2).abs() < 1e-12);
}

#[test]
fn linear_clamps_outside_domain() {
    let interp = Interpolator::new(&pts(&[0.0, 1.0], &[2.0, 4.0]), InterpMode::Linear).unwrap();
    assert_eq!(interp.domain(), (0.0, 1.0));
    assert_eq!(scalar(interp.eval(-3.0)), 2.0);
    assert_eq!(scalar(interp.eval(7.5)), 4.0);
    assert_eq!(scalar(interp.eval(f64::NAN)), 2.0);
}

#[test]
fn cubic_hits_every_knot() {
    let xs = [0.0, 0.2, 0.45, 0.7, 1.0];
    let ys = [0.3, -0.8, 0.1, 0.9, -0.2];
    let interp = Interpolator::new(&pts(&xs, &ys), InterpMode::Cubic).unwrap();
    for (x, y) in xs.iter().zip(ys) {
        assert_eq!(scalar(interp.eval(*x)), y);
    }
}

#[test]
fn cubic_reproduces_a_cubic_polynomial() {
    let f = |x: f64| x * x * x - 2.0 * x + 1.0;
    let xs = [0.0, 0.1, 0.35, 0.5, 0.8, 1.0];
    let ys: Vec<f64> = xs.iter().map(|x| f(*x)).collect();
    let interp = Interpolator::new(&pts(&xs, &ys), InterpMode::Cubic).unwrap();
    for i in 0..=50 {
        let x = f64::from(i) / 50.0;
        let got = scalar(interp.eval(x));
        assert!((got - f(x)).abs() < 1e-9, "x={x} got={got} want={}", f(x));
    }
}

#[test]
fn cubic_with_four_points_is_one_polynomial() {
    let f = |x: f64| 2.0 * x * x - x + 0.5;
    let xs = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0];
    let ys: Vec<f64> = xs.iter().map(|x| f(*x)).collect();
    let interp = Interpolator::new(&pts(&xs, &ys), InterpMode::Cubic).unwrap();
    assert!((scalar(interp.eval(0.5)) - f(0.5)).abs() < 1e-12);
    assert!((scalar(interp.eval(0.9)) - f(0.9)).abs() < 1e-12);
}

#[test]
fn cubic_needs_four_points() {
    let err =
        Interpolator::new(&pts(&[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0]), InterpMode::Cubic).unwrap_err();
    assert!(matches!(
        err,
        RoughwalkError::InsufficientPoints { got: 3, need: 4 }
    ));
}

#[test]
fn linear_needs_two_points() {
    let err = Interpolator::new(&pts(&[0.0], &[1.0]), InterpMode::Linear).unwrap_err();
    assert!(matches!(
        err,
        RoughwalkError::InsufficientPoints { got: 1, need: 2 }
    ));
}

#[test]
fn rejects_non_increasing_x() {
    let err = Interpolator::new(&pts(&[0.0, 0.5, 0.5], &[1.0, 2.0, 3.0]), InterpMode::Linear)
        .unwrap_err();
    assert!(matches!(err, RoughwalkError::Validation(_)));
}

#[test]
fn rejects_mixed_arity() {
    let points = vec![
        (0.0, Value::from([1.0, 2.0, 3.0])),
        (1.0, Value::from([1.0, 2.0])),
    ];
    let err = Interpolator::new(&points, InterpMode::Linear).unwrap_err();
    assert!(matches!(err, RoughwalkError::Validation(_)));

    let points = vec![(0.0, Value::Scalar(1.0)), (1.0, Value::from([2.0]))];
    assert!(Interpolator::new(&points, InterpMode::Linear).is_err());
}

#[test]
fn vector_values_interpolate_per_component() {
    let interp = Interpolator::parametric(
        &[Value::from([0.0, 100.0, 255.0]), Value::from([255.0, 100.0, 0.0])],
        InterpMode::Linear,
    )
    .unwrap();
    let mid = interp.eval(0.5);
    assert_eq!(mid.arity(), 3);
    let c = mid.components();
    assert!((c[0] - 127.5).abs() < 1e-9);
    assert_eq!(c[1], 100.0);
    assert!((c[2] - 127.5).abs() < 1e-9);
}

#[test]
fn parametric_spreads_waypoints_over_unit_interval() {
    let interp = Interpolator::parametric(
        &[Value::Scalar(0.0), Value::Scalar(10.0), Value::Scalar(0.0)],
        InterpMode::Linear,
    )
    .unwrap();
    assert_eq!(interp.domain(), (0.0, 1.0));
    assert_eq!(scalar(interp.eval(0.5)), 10.0);
    assert!((scalar(interp.eval(0.25)) - 5.0).abs() < 1e-12);
}

#[test]
fn scalar_fast_path_matches_general_path() {
    let xs = linspace(0.0, 1.0, 6);
    let ys = vec![0.1, -0.4, 0.3, 0.0, 0.8, -0.6];
    let fast = Interpolator::scalar(xs.clone(), ys.clone(), InterpMode::Cubic).unwrap();
    let general = Interpolator::new(&pts(&xs, &ys), InterpMode::Cubic).unwrap();
    for i in 0..=20 {
        let x = f64::from(i) / 20.0;
        assert_eq!(fast.eval_scalar(x), scalar(general.eval(x)));
    }
}

#[test]
fn scalar_fast_path_checks_lengths() {
    let err = Interpolator::scalar(vec![0.0, 1.0], vec![1.0], InterpMode::Linear).unwrap_err();
    assert!(matches!(err, RoughwalkError::MismatchedLengths(_)));
}
