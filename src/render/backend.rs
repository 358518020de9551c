use crate::foundation::core::{BezPath, Canvas, Point};
use crate::scene::color::Rgba;

/// One rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if self.premultiplied {
            crate::foundation::math::unpremultiply_buffer(&self.data)
        } else {
            self.data.clone()
        }
    }

    /// Pixel at `(x, y)` as stored, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Raster surface the renderers draw on.
///
/// Draw calls may be batched; everything issued before [`DrawSurface::snapshot`] or
/// [`DrawSurface::blit_premul`] is visible in its result.
pub trait DrawSurface {
    fn canvas(&self) -> Canvas;

    /// Reset every pixel to the surface background.
    fn clear(&mut self);

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64);

    fn stroke_cubic(
        &mut self,
        start: Point,
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
        color: Rgba,
        width: f64,
    );

    /// Fill closed contours with non-zero winding.
    fn fill_contours(&mut self, path: &BezPath, color: Rgba);

    /// Source-over a premultiplied RGBA8 image with its top-left corner at `(x, y)`.
    /// Pixels outside the surface are dropped.
    fn blit_premul(&mut self, x: i64, y: i64, width: u32, height: u32, data: &[u8]);

    fn snapshot(&mut self) -> FrameRGBA;
}
