use super::*;

fn all() -> Vec<Ease> {
    let mut out = vec![Ease::Linear];
    for c in [Curve::Quad, Curve::Cubic, Curve::Sine] {
        out.extend([Ease::In(c), Ease::Out(c), Ease::InOut(c)]);
    }
    out
}

#[test]
fn endpoints_are_stable() {
    for ease in all() {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in all() {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn out_mirrors_in() {
    let t = 0.3;
    let i = Ease::In(Curve::Cubic).apply(t);
    let o = Ease::Out(Curve::Cubic).apply(1.0 - t);
    assert!((i + o - 1.0).abs() < 1e-12);
}

#[test]
fn in_out_passes_through_midpoint() {
    assert!((Ease::InOut(Curve::Quad).apply(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn clamps_outside_unit_interval() {
    assert_eq!(Ease::In(Curve::Quad).apply(-1.0), 0.0);
    assert_eq!(Ease::In(Curve::Quad).apply(2.0), 1.0);
}
