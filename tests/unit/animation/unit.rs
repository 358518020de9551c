use super::*;
use crate::timeline::holder::PropertyHolder;
use crate::timeline::keys::{Attr, ElementKind};
use std::sync::Arc;

fn key(i: usize) -> PropKey {
    let shape: Arc<str> = Arc::from("s");
    PropKey::element(&shape, ElementKind::Line, i, Attr::EndX)
}

fn unit(d: f64, i: usize, to: f64) -> AnimUnit {
    AnimUnit::new(d, Ease::Linear, [(key(i), AnimValue::Scalar(to))]).unwrap()
}

#[test]
fn negative_or_non_finite_duration_is_rejected() {
    assert!(AnimUnit::new(-0.1, Ease::Linear, []).is_err());
    assert!(AnimUnit::new(f64::NAN, Ease::Linear, []).is_err());
    assert!(AnimUnit::new(0.0, Ease::Linear, []).is_ok());
}

#[test]
fn zero_duration_is_instant() {
    let u = unit(0.0, 0, 1.0);
    assert_eq!(u.progress(0.0), 1.0);
}

#[test]
fn composed_durations_derive_from_children() {
    for (a, b) in [(0.0, 0.0), (0.5, 1.25), (2.0, 0.3)] {
        let seq = unit(a, 0, 1.0) + unit(b, 1, 1.0);
        assert_eq!(seq.duration(), a + b);
        let par = unit(a, 0, 1.0) & unit(b, 1, 1.0);
        assert_eq!(par.duration(), f64::max(a, b));
    }
}

#[test]
fn folds_are_left_associative() {
    let tree = AnimTree::sequence_all([unit(1.0, 0, 1.0), unit(2.0, 1, 1.0), unit(3.0, 2, 1.0)])
        .unwrap();
    match &tree {
        AnimTree::Sequence(left, right) => {
            assert!(matches!(**left, AnimTree::Sequence(_, _)));
            assert!(matches!(**right, AnimTree::Leaf(_)));
        }
        other => panic!("unexpected tree {other:?}"),
    }
    assert_eq!(tree.duration(), 6.0);
    assert_eq!(tree.leaves().len(), 3);
    assert_eq!(tree.leaves()[0].duration(), 1.0);
    assert!(AnimTree::parallel_all(Vec::<AnimUnit>::new()).is_none());
}

#[test]
fn animated_properties_is_the_union() {
    let tree = (unit(1.0, 0, 1.0) & unit(1.0, 1, 1.0)) + unit(1.0, 0, 2.0);
    let props = tree.animated_properties();
    assert_eq!(props.len(), 2);
    assert!(props.contains(&key(0)) && props.contains(&key(1)));
}

#[test]
fn initialize_requires_every_property() {
    let u = unit(1.0, 0, 10.0);
    let mut h = PropertyHolder::new();
    assert!(u.initialize(&h).is_err());

    h.set(key(0), 2.0);
    let starts = u.initialize(&h).unwrap();
    u.apply(&starts, 0.5, &mut h);
    assert_eq!(h.scalar(&key(0)), Some(6.0));
    u.apply(&starts, 1.0, &mut h);
    assert_eq!(h.scalar(&key(0)), Some(10.0));
}

#[test]
fn completion_lands_exactly_on_target() {
    let u = AnimUnit::new(1.0, Ease::OutBounce, [(key(0), AnimValue::Scalar(0.3))]).unwrap();
    let v = u.sample(&AnimValue::Scalar(0.1), &AnimValue::Scalar(0.3), 1.0);
    assert_eq!(v, AnimValue::Scalar(0.3));
}
