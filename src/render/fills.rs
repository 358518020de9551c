use crate::render::backend::DrawSurface;
use crate::scene::color::Rgba;
use crate::scene::path::FillShape;
use crate::timeline::holder::PropertyHolder;

/// Fill every shape at the holder's mesh opacity.
///
/// Shapes without a fill of their own are filled with `line_color`. Nothing is drawn at
/// zero opacity. Returns how many shapes were issued.
pub fn render_fills(
    surface: &mut dyn DrawSurface,
    holder: &PropertyHolder,
    shapes: &[FillShape],
    line_color: Rgba,
) -> usize {
    let opacity = holder.mesh_opacity().clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return 0;
    }

    let mut drawn = 0;
    for shape in shapes {
        let base = if shape.color.is_transparent() {
            line_color
        } else {
            shape.color
        };
        let color = base.with_alpha(base.a * opacity);
        if color.is_transparent() {
            continue;
        }
        surface.fill_contours(&shape.path, color);
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
#[path = "../../tests/unit/render/fills.rs"]
mod tests;
