use crate::animation::ease::Ease;
use crate::animation::unit::AnimUnit;
use crate::animation::value::AnimValue;
use crate::foundation::core::Point;
use crate::foundation::error::PenlineResult;
use crate::scene::path::{Document, PathElement, Segment};
use crate::timeline::holder::PropertyHolder;
use crate::timeline::keys::{Attr, PointAttr, PropKey};

/// Seed `holder` with every element's geometry and build one unit per element.
///
/// When `animate` is set, end and control points start collapsed onto the element's start
/// point and each unit draws them out to their final position over `duration` seconds.
/// Otherwise the holder receives final geometry directly. Units come back in document order.
pub fn build_animation_list(
    doc: &Document,
    holder: &mut PropertyHolder,
    animate: bool,
    duration: f64,
    ease: Ease,
) -> PenlineResult<Vec<AnimUnit>> {
    holder.set(PropKey::MeshOpacity, if animate { 0.0 } else { 1.0 });

    doc.elements()
        .iter()
        .map(|el| {
            let moving = moving_points(el);
            seed(holder, el, PointAttr::Start, el.segment.start());
            for (which, p) in &moving {
                let seeded = if animate { el.segment.start() } else { *p };
                seed(holder, el, *which, seeded);
            }

            let targets = moving.iter().flat_map(|(which, p)| {
                [
                    (key(el, which.x()), AnimValue::Scalar(p.x)),
                    (key(el, which.y()), AnimValue::Scalar(p.y)),
                ]
            });
            AnimUnit::new(duration, ease, targets)
        })
        .collect()
}

fn moving_points(el: &PathElement) -> Vec<(PointAttr, Point)> {
    match el.segment {
        Segment::Line { end, .. } => vec![(PointAttr::End, end)],
        Segment::Cubic {
            ctrl1, ctrl2, end, ..
        } => vec![
            (PointAttr::Control1, ctrl1),
            (PointAttr::Control2, ctrl2),
            (PointAttr::End, end),
        ],
    }
}

fn key(el: &PathElement, attr: Attr) -> PropKey {
    PropKey::element(&el.shape, el.kind(), el.index, attr)
}

fn seed(holder: &mut PropertyHolder, el: &PathElement, which: PointAttr, p: Point) {
    holder.set_point(&el.shape, el.kind(), el.index, which, p);
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
