use std::sync::Arc;

use crate::foundation::core::{BezPath, Point, Size};
use crate::scene::color::Rgba;
use crate::timeline::keys::ElementKind;

/// Geometry of one drawable path element, in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line {
        start: Point,
        end: Point,
    },
    Cubic {
        start: Point,
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    },
}

impl Segment {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Line { .. } => ElementKind::Line,
            Self::Cubic { .. } => ElementKind::Bezier,
        }
    }

    pub fn start(&self) -> Point {
        match *self {
            Self::Line { start, .. } | Self::Cubic { start, .. } => start,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            Self::Line { end, .. } | Self::Cubic { end, .. } => end,
        }
    }

    /// True when every point coincides with the start.
    pub fn is_degenerate(&self) -> bool {
        match *self {
            Self::Line { start, end } => start == end,
            Self::Cubic {
                start,
                ctrl1,
                ctrl2,
                end,
            } => start == ctrl1 && start == ctrl2 && start == end,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    /// Fill of the owning shape; fully transparent when the shape is unfilled.
    pub fill: Rgba,
    pub stroke: Option<Rgba>,
    pub stroke_width: Option<f64>,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            fill: Rgba::TRANSPARENT,
            stroke: None,
            stroke_width: None,
        }
    }
}

/// One path element tagged with its owning shape.
#[derive(Clone, Debug, PartialEq)]
pub struct PathElement {
    pub shape: Arc<str>,
    /// Position among elements of the same kind, in document order.
    pub index: usize,
    pub segment: Segment,
    pub style: ElementStyle,
}

impl PathElement {
    pub fn kind(&self) -> ElementKind {
        self.segment.kind()
    }
}

/// A closed fill region gathered from every element of one shape.
#[derive(Clone, Debug)]
pub struct FillShape {
    pub shape: Arc<str>,
    pub color: Rgba,
    pub path: BezPath,
}

/// Ordered path elements of one drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    size: Size,
    elements: Vec<PathElement>,
    lines: usize,
    beziers: usize,
}

impl Document {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            elements: Vec::new(),
            lines: 0,
            beziers: 0,
        }
    }

    /// Append an element, assigning its per-kind index.
    pub fn push(&mut self, shape: impl Into<Arc<str>>, segment: Segment, style: ElementStyle) {
        let counter = match segment.kind() {
            ElementKind::Line => &mut self.lines,
            ElementKind::Bezier => &mut self.beziers,
        };
        let index = *counter;
        *counter += 1;
        self.elements.push(PathElement {
            shape: shape.into(),
            index,
            segment,
            style,
        });
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Group elements by shape (first-appearance order) into closed contours.
    ///
    /// A new contour begins whenever an element does not start where the previous one ended.
    pub fn fill_shapes(&self) -> Vec<FillShape> {
        let mut out: Vec<FillShape> = Vec::new();
        let mut last_end: Vec<Option<Point>> = Vec::new();

        for el in &self.elements {
            let slot = match out.iter().position(|s| s.shape == el.shape) {
                Some(i) => i,
                None => {
                    out.push(FillShape {
                        shape: Arc::clone(&el.shape),
                        color: el.style.fill,
                        path: BezPath::new(),
                    });
                    last_end.push(None);
                    out.len() - 1
                }
            };

            let path = &mut out[slot].path;
            let start = el.segment.start();
            if last_end[slot] != Some(start) {
                if last_end[slot].is_some() {
                    path.close_path();
                }
                path.move_to(start);
            }
            match el.segment {
                Segment::Line { end, .. } => path.line_to(end),
                Segment::Cubic {
                    ctrl1, ctrl2, end, ..
                } => path.curve_to(ctrl1, ctrl2, end),
            }
            last_end[slot] = Some(el.segment.end());
        }

        for s in &mut out {
            if !s.path.elements().is_empty() {
                s.path.close_path();
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/path.rs"]
mod tests;
