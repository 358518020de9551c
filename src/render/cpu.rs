use crate::foundation::core::{BezPath, Canvas, Point, Rgba8Premul};
use crate::foundation::error::PenlineResult;
use crate::foundation::math::over_in_place;
use crate::render::backend::{DrawSurface, FrameRGBA};
use crate::scene::color::Rgba;

/// [`DrawSurface`] backed by `vello_cpu`.
///
/// Draw calls are recorded into a render context and rasterized into a cleared scratch
/// pixmap on flush; the scratch is then composited over the persistent buffer.
pub struct CpuSurface {
    canvas: Canvas,
    width_u16: u16,
    height_u16: u16,
    background: Rgba8Premul,
    buffer: Vec<u8>,
    scratch: vello_cpu::Pixmap,
    pending: Option<vello_cpu::RenderContext>,
}

impl CpuSurface {
    pub fn new(canvas: Canvas, background: Rgba8Premul) -> PenlineResult<Self> {
        canvas.validate()?;
        let width_u16 = canvas.width as u16;
        let height_u16 = canvas.height as u16;
        let mut surface = Self {
            canvas,
            width_u16,
            height_u16,
            background,
            buffer: vec![0; canvas.rgba8_len()],
            scratch: vello_cpu::Pixmap::new(width_u16, height_u16),
            pending: None,
        };
        surface.clear();
        Ok(surface)
    }

    pub fn background(&self) -> Rgba8Premul {
        self.background
    }

    fn ctx(&mut self) -> &mut vello_cpu::RenderContext {
        let (w, h) = (self.width_u16, self.height_u16);
        let ctx = self
            .pending
            .get_or_insert_with(|| vello_cpu::RenderContext::new(w, h));
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx
    }

    fn flush(&mut self) {
        let Some(mut ctx) = self.pending.take() else {
            return;
        };
        ctx.flush();
        self.scratch.data_as_u8_slice_mut().fill(0);
        ctx.render_to_pixmap(&mut self.scratch);
        over_in_place(&mut self.buffer, self.scratch.data_as_u8_slice());
    }

    fn stroke(&mut self, path: vello_cpu::kurbo::BezPath, color: Rgba, width: f64) {
        if width <= 0.0 || color.is_transparent() {
            return;
        }
        let [r, g, b, a] = color.to_rgba8();
        let ctx = self.ctx();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(width)
                .with_caps(vello_cpu::kurbo::Cap::Round)
                .with_join(vello_cpu::kurbo::Join::Round),
        );
        ctx.stroke_path(&path);
    }
}

impl DrawSurface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self) {
        self.pending = None;
        let bg = self.background.to_array();
        for px in self.buffer.chunks_exact_mut(4) {
            px.copy_from_slice(&bg);
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        if from == to {
            return;
        }
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(from));
        path.line_to(point_to_cpu(to));
        self.stroke(path, color, width);
    }

    fn stroke_cubic(
        &mut self,
        start: Point,
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
        color: Rgba,
        width: f64,
    ) {
        if start == ctrl1 && start == ctrl2 && start == end {
            return;
        }
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(start));
        path.curve_to(point_to_cpu(ctrl1), point_to_cpu(ctrl2), point_to_cpu(end));
        self.stroke(path, color, width);
    }

    fn fill_contours(&mut self, path: &BezPath, color: Rgba) {
        if color.is_transparent() || path.elements().is_empty() {
            return;
        }
        let [r, g, b, a] = color.to_rgba8();
        let cpu_path = bezpath_to_cpu(path);
        let ctx = self.ctx();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_path(&cpu_path);
    }

    fn blit_premul(&mut self, x: i64, y: i64, width: u32, height: u32, data: &[u8]) {
        self.flush();
        blit_clipped(
            &mut self.buffer,
            self.canvas.width,
            self.canvas.height,
            data,
            width,
            height,
            x,
            y,
        );
    }

    fn snapshot(&mut self) -> FrameRGBA {
        self.flush();
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.buffer.clone(),
            premultiplied: true,
        }
    }
}

/// Source-over `src` onto `dst` at `(x, y)`, dropping pixels outside `dst`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn blit_clipped(
    dst: &mut [u8],
    dst_w: u32,
    dst_h: u32,
    src: &[u8],
    src_w: u32,
    src_h: u32,
    x: i64,
    y: i64,
) {
    if src.len() < src_w as usize * src_h as usize * 4 {
        return;
    }
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(i64::from(src_w)).min(i64::from(dst_w));
    let y1 = y.saturating_add(i64::from(src_h)).min(i64::from(dst_h));
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let run = ((x1 - x0) * 4) as usize;
    for dy in y0..y1 {
        let sy = (dy - y) as usize;
        let sx = (x0 - x) as usize;
        let s = (sy * src_w as usize + sx) * 4;
        let d = (dy as usize * dst_w as usize + x0 as usize) * 4;
        over_in_place(&mut dst[d..d + run], &src[s..s + run]);
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
