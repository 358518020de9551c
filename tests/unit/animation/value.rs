use super::*;

fn map(entries: &[(&str, f64)]) -> AnimValue {
    AnimValue::Map(
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), AnimValue::Scalar(*v)))
            .collect(),
    )
}

#[test]
fn scalar_endpoints_are_exact() {
    let a = AnimValue::Scalar(3.0);
    let b = AnimValue::Scalar(-7.5);
    assert_eq!(AnimValue::interpolate(&a, &b, 0.0), a);
    assert_eq!(AnimValue::interpolate(&a, &b, 1.0), b);
    assert_eq!(AnimValue::interpolate(&a, &b, 0.5), AnimValue::Scalar(-2.25));
}

#[test]
fn overshoot_extrapolates() {
    let v = AnimValue::interpolate(&0.0.into(), &10.0.into(), 1.1);
    assert!((v.as_scalar().unwrap() - 11.0).abs() < 1e-12);
}

#[test]
fn sequences_keep_their_kind() {
    let a = AnimValue::from(kurbo::Point::new(0.0, 10.0));
    let b = AnimValue::from(kurbo::Point::new(10.0, 20.0));
    let mid = AnimValue::interpolate(&a, &b, 0.5);
    assert_eq!(
        mid,
        AnimValue::Tuple(vec![AnimValue::Scalar(5.0), AnimValue::Scalar(15.0)])
    );

    let la = AnimValue::List(vec![1.0.into(), 2.0.into()]);
    let lb = AnimValue::List(vec![3.0.into()]);
    // Missing trailing entries in the end value count as zero.
    assert_eq!(
        AnimValue::interpolate(&la, &lb, 1.0),
        AnimValue::List(vec![3.0.into(), 0.0.into()])
    );
}

#[test]
fn maps_follow_start_keys() {
    let a = map(&[("x", 0.0), ("y", 4.0)]);
    let b = map(&[("x", 2.0), ("z", 9.0)]);
    assert_eq!(AnimValue::interpolate(&a, &b, 0.5), map(&[("x", 1.0), ("y", 2.0)]));
}

#[test]
fn mismatched_kinds_step_at_completion() {
    let a = AnimValue::Scalar(1.0);
    let b = map(&[("x", 2.0)]);
    assert_eq!(AnimValue::interpolate(&a, &b, 0.99), a);
    assert_eq!(AnimValue::interpolate(&a, &b, 1.0), b);
}

#[test]
fn inputs_are_not_mutated() {
    let a = AnimValue::List(vec![1.0.into()]);
    let b = AnimValue::List(vec![2.0.into()]);
    let (a0, b0) = (a.clone(), b.clone());
    let _ = AnimValue::interpolate(&a, &b, 0.3);
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}
