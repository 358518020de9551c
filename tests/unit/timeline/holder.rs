use super::*;
use crate::timeline::keys::Attr;

#[test]
fn points_need_both_coordinates() {
    let shape: Arc<str> = Arc::from("s");
    let mut h = PropertyHolder::new();
    assert_eq!(h.point(&shape, ElementKind::Line, 0, PointAttr::End), None);

    h.set(PropKey::element(&shape, ElementKind::Line, 0, Attr::EndX), 4.0);
    assert_eq!(h.point(&shape, ElementKind::Line, 0, PointAttr::End), None);

    h.set_point(&shape, ElementKind::Line, 0, PointAttr::End, Point::new(4.0, 5.0));
    assert_eq!(
        h.point(&shape, ElementKind::Line, 0, PointAttr::End),
        Some(Point::new(4.0, 5.0))
    );
}

#[test]
fn snapshot_defaults_missing_to_zero() {
    let mut h = PropertyHolder::new();
    h.set(PropKey::MeshOpacity, 0.5);
    let shape: Arc<str> = Arc::from("s");
    let other = PropKey::element(&shape, ElementKind::Bezier, 1, Attr::Control1X);
    let snap = h.snapshot([&PropKey::MeshOpacity, &other]);
    assert_eq!(snap[&PropKey::MeshOpacity], AnimValue::Scalar(0.5));
    assert_eq!(snap[&other], AnimValue::Scalar(0.0));
}

#[test]
fn reset_clears_everything() {
    let mut h = PropertyHolder::new();
    h.set(PropKey::MeshOpacity, 1.0);
    assert_eq!(h.mesh_opacity(), 1.0);
    h.reset();
    assert!(h.is_empty());
    assert_eq!(h.mesh_opacity(), 0.0);
}
