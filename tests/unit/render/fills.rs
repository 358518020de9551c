use super::*;
use crate::foundation::core::{BezPath, Canvas};
use crate::render::recording::{DrawOp, RecordingSurface};
use crate::timeline::keys::PropKey;
use std::sync::Arc;

fn shape(color: Rgba) -> FillShape {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((4.0, 0.0));
    path.line_to((4.0, 4.0));
    path.close_path();
    FillShape {
        shape: Arc::from("s"),
        color,
        path,
    }
}

fn fill_colors(s: &RecordingSurface) -> Vec<Rgba> {
    s.ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Fill { color, .. } => Some(*color),
            _ => None,
        })
        .collect()
}

#[test]
fn zero_opacity_draws_nothing() {
    let h = PropertyHolder::new();
    let mut s = RecordingSurface::new(Canvas::new(8, 8).unwrap());
    assert_eq!(render_fills(&mut s, &h, &[shape(Rgba::BLACK)], Rgba::BLACK), 0);
    assert!(s.ops().is_empty());
}

#[test]
fn alpha_scales_with_mesh_opacity() {
    let mut h = PropertyHolder::new();
    h.set(PropKey::MeshOpacity, 0.5);
    let mut s = RecordingSurface::new(Canvas::new(8, 8).unwrap());
    render_fills(&mut s, &h, &[shape(Rgba::new(0.0, 1.0, 0.0, 0.8))], Rgba::BLACK);
    assert_eq!(fill_colors(&s), vec![Rgba::new(0.0, 1.0, 0.0, 0.4)]);
}

#[test]
fn unfilled_shapes_use_the_line_color() {
    let mut h = PropertyHolder::new();
    h.set(PropKey::MeshOpacity, 1.0);
    let line = Rgba::new(0.2, 0.2, 0.2, 1.0);
    let mut s = RecordingSurface::new(Canvas::new(8, 8).unwrap());
    render_fills(&mut s, &h, &[shape(Rgba::TRANSPARENT)], line);
    assert_eq!(fill_colors(&s), vec![line]);
}
