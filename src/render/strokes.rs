use crate::render::backend::DrawSurface;
use crate::scene::color::Rgba;
use crate::scene::path::{Document, Segment};
use crate::timeline::holder::PropertyHolder;
use crate::timeline::keys::PointAttr;

/// Stroke every element at the geometry currently held in `holder`.
///
/// Elements with any coordinate missing from the holder are skipped. Returns how many
/// elements were issued to the surface.
pub fn render_strokes(
    surface: &mut dyn DrawSurface,
    holder: &PropertyHolder,
    doc: &Document,
    default_color: Rgba,
    default_width: f64,
) -> usize {
    let mut drawn = 0;
    for el in doc.elements() {
        let color = el.style.stroke.unwrap_or(default_color);
        let width = el.style.stroke_width.unwrap_or(default_width);
        let point = |which| holder.point(&el.shape, el.kind(), el.index, which);

        match el.segment {
            Segment::Line { .. } => {
                if let (Some(s), Some(e)) = (point(PointAttr::Start), point(PointAttr::End)) {
                    surface.stroke_line(s, e, color, width);
                    drawn += 1;
                }
            }
            Segment::Cubic { .. } => {
                if let (Some(s), Some(c1), Some(c2), Some(e)) = (
                    point(PointAttr::Start),
                    point(PointAttr::Control1),
                    point(PointAttr::Control2),
                    point(PointAttr::End),
                ) {
                    surface.stroke_cubic(s, c1, c2, e, color, width);
                    drawn += 1;
                }
            }
        }
    }
    drawn
}

#[cfg(test)]
#[path = "../../tests/unit/render/strokes.rs"]
mod tests;
