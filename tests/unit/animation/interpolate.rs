use super::*;
use crate::animation::ease::Curve;

#[test]
fn clamp_holds_endpoints() {
    let opts = InterpolateOpts::CLAMP;
    assert_eq!(interpolate(-5.0, [0.0, 10.0], [0.0, 100.0], opts), 0.0);
    assert_eq!(interpolate(5.0, [0.0, 10.0], [0.0, 100.0], opts), 50.0);
    assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 100.0], opts), 100.0);
}

#[test]
fn exact_breakpoints_return_exact_outputs() {
    let xs = [0.0, 3.0, 7.0, 10.0];
    let ys = [0.1, 0.7, 0.3, 0.9];
    for (x, y) in xs.iter().zip(ys.iter()) {
        assert_eq!(interpolate_clamped(*x, xs, ys), *y);
    }
}

#[test]
fn descending_outputs_interpolate() {
    assert_eq!(interpolate_clamped(7.5, [0.0, 15.0], [10.0, 0.0]), 5.0);
}

#[test]
fn extend_continues_outer_slopes() {
    let opts = InterpolateOpts::EXTEND;
    assert_eq!(interpolate(-5.0, [0.0, 10.0], [0.0, 100.0], opts), -50.0);
    assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 100.0], opts), 200.0);
}

#[test]
fn sides_are_independent() {
    let opts = InterpolateOpts {
        left: Extrapolate::Extend,
        right: Extrapolate::Clamp,
        ..InterpolateOpts::default()
    };
    assert_eq!(interpolate(-10.0, [0.0, 10.0], [0.0, 1.0], opts), -1.0);
    assert_eq!(interpolate(30.0, [0.0, 10.0], [0.0, 1.0], opts), 1.0);
}

#[test]
fn zero_width_interval_is_a_step() {
    let xs = [0.0, 5.0, 5.0, 10.0];
    let ys = [0.0, 1.0, 2.0, 3.0];
    assert!(interpolate_clamped(4.999, xs, ys) < 1.0);
    assert_eq!(interpolate_clamped(5.0, xs, ys), 2.0);
    assert!((interpolate_clamped(7.5, xs, ys) - 2.5).abs() < 1e-12);

    let held = interpolate(6.0, [5.0, 5.0], [0.0, 1.0], InterpolateOpts::EXTEND);
    assert_eq!(held, 1.0);
    let held = interpolate(4.0, [5.0, 5.0], [0.0, 1.0], InterpolateOpts::EXTEND);
    assert_eq!(held, 0.0);
}

#[test]
fn single_and_empty_tables() {
    assert_eq!(interpolate_clamped(42.0, [3.0], [7.0]), 7.0);
    assert_eq!(interpolate_clamped::<0>(42.0, [], []), 42.0);
}

#[test]
fn is_deterministic() {
    let a = interpolate_clamped(37.0, [15.0, 40.0], [0.0, 96.0]);
    let b = interpolate_clamped(37.0, [15.0, 40.0], [0.0, 96.0]);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn ease_shapes_inner_segment_only() {
    let opts = InterpolateOpts::CLAMP.with_ease(Ease::In(Curve::Quad));
    assert_eq!(interpolate(5.0, [0.0, 10.0], [0.0, 100.0], opts), 25.0);
    assert_eq!(interpolate(10.0, [0.0, 10.0], [0.0, 100.0], opts), 100.0);
    assert_eq!(interpolate(-1.0, [0.0, 10.0], [0.0, 100.0], opts), 0.0);
}

#[test]
fn nan_input_passes_through() {
    assert!(interpolate_clamped(f64::NAN, [0.0, 1.0], [0.0, 1.0]).is_nan());
}

#[test]
fn breakpoints_validate_shape() {
    assert!(Breakpoints::new(vec![0.0, 1.0], vec![0.0]).is_err());
    assert!(Breakpoints::new(vec![], vec![]).is_err());
    assert!(Breakpoints::new(vec![1.0, 0.0], vec![0.0, 1.0]).is_err());
    assert!(Breakpoints::new(vec![0.0, f64::INFINITY], vec![0.0, 1.0]).is_err());
    assert!(Breakpoints::new(vec![0.0, 0.0, 1.0], vec![0.0, 1.0, 2.0]).is_ok());
}

#[test]
fn breakpoints_sample_matches_free_function() {
    let bp = Breakpoints::new(vec![50.0, 55.0], vec![0.0, 1.0]).unwrap();
    for f in 45..60 {
        let f = f64::from(f);
        assert_eq!(
            bp.sample(f),
            interpolate_clamped(f, [50.0, 55.0], [0.0, 1.0])
        );
    }

    let extended = bp.with_opts(InterpolateOpts::EXTEND);
    assert_eq!(extended.sample(60.0), 2.0);
}

#[test]
fn breakpoints_deserialize_with_default_opts() {
    let bp: Breakpoints =
        serde_json::from_str(r#"{"input":[0,10],"output":[0,100]}"#).unwrap();
    bp.validate().unwrap();
    assert_eq!(bp.opts(), InterpolateOpts::CLAMP);
    assert_eq!(bp.sample(-5.0), 0.0);
}
