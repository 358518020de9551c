use crate::foundation::core::{BezPath, Canvas, Point};
use crate::render::backend::{DrawSurface, FrameRGBA};
use crate::scene::color::Rgba;

/// A draw call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
    Cubic {
        points: [Point; 4],
        color: Rgba,
        width: f64,
    },
    Fill {
        path: BezPath,
        color: Rgba,
    },
    Blit {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
}

/// Surface that records draw calls instead of rasterizing them.
///
/// Snapshots are transparent frames of the canvas size; the op log since the last clear is
/// available through [`RecordingSurface::ops`].
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    ops: Vec<DrawOp>,
    snapshots: Vec<Vec<DrawOp>>,
}

impl RecordingSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
            snapshots: Vec::new(),
        }
    }

    /// Ops issued since the last clear.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Op log captured at each snapshot, in order.
    pub fn snapshots(&self) -> &[Vec<DrawOp>] {
        &self.snapshots
    }
}

impl DrawSurface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
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
        self.ops.push(DrawOp::Cubic {
            points: [start, ctrl1, ctrl2, end],
            color,
            width,
        });
    }

    fn fill_contours(&mut self, path: &BezPath, color: Rgba) {
        self.ops.push(DrawOp::Fill {
            path: path.clone(),
            color,
        });
    }

    fn blit_premul(&mut self, x: i64, y: i64, width: u32, height: u32, _data: &[u8]) {
        self.ops.push(DrawOp::Blit {
            x,
            y,
            width,
            height,
        });
    }

    fn snapshot(&mut self) -> FrameRGBA {
        self.snapshots.push(self.ops.clone());
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: vec![0; self.canvas.rgba8_len()],
            premultiplied: true,
        }
    }
}
