use super::*;
use crate::foundation::core::Size;
use crate::scene::path::ElementStyle;
use crate::timeline::keys::{Attr, ElementKind};
use std::sync::Arc;

fn doc() -> Document {
    let mut d = Document::new(Size::new(100.0, 100.0));
    d.push(
        "s",
        Segment::Line {
            start: Point::new(0.0, 0.0),
            end: Point::new(10.0, 0.0),
        },
        ElementStyle::default(),
    );
    d.push(
        "s",
        Segment::Cubic {
            start: Point::new(10.0, 0.0),
            ctrl1: Point::new(20.0, 0.0),
            ctrl2: Point::new(20.0, 10.0),
            end: Point::new(10.0, 10.0),
        },
        ElementStyle::default(),
    );
    d
}

#[test]
fn animated_list_collapses_geometry_onto_start() {
    let mut h = PropertyHolder::new();
    let units = build_animation_list(&doc(), &mut h, true, 0.5, Ease::Linear).unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].targets().len(), 2);
    assert_eq!(units[1].targets().len(), 6);
    assert!(units.iter().all(|u| u.duration() == 0.5));

    let shape: Arc<str> = Arc::from("s");
    assert_eq!(
        h.point(&shape, ElementKind::Line, 0, PointAttr::End),
        Some(Point::new(0.0, 0.0))
    );
    assert_eq!(
        h.point(&shape, ElementKind::Bezier, 0, PointAttr::Control2),
        Some(Point::new(10.0, 0.0))
    );
    assert_eq!(h.mesh_opacity(), 0.0);

    let end_x = PropKey::element(&shape, ElementKind::Bezier, 0, Attr::EndX);
    assert_eq!(units[1].targets()[&end_x], AnimValue::Scalar(10.0));
}

#[test]
fn static_list_seeds_final_geometry() {
    let mut h = PropertyHolder::new();
    build_animation_list(&doc(), &mut h, false, 0.5, Ease::Linear).unwrap();
    let shape: Arc<str> = Arc::from("s");
    assert_eq!(
        h.point(&shape, ElementKind::Bezier, 0, PointAttr::End),
        Some(Point::new(10.0, 10.0))
    );
    assert_eq!(h.mesh_opacity(), 1.0);
}

#[test]
fn negative_duration_is_rejected() {
    let mut h = PropertyHolder::new();
    assert!(build_animation_list(&doc(), &mut h, true, -1.0, Ease::Linear).is_err());
}
