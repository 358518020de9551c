use std::path::Path;

use anyhow::Context;
use usvg::tiny_skia_path::PathSegment;

use crate::foundation::core::{Affine, Point, Size};
use crate::foundation::error::{PenlineError, PenlineResult};
use crate::scene::color::Rgba;
use crate::scene::path::{Document, ElementStyle, Segment};

/// Parse SVG bytes into a document scaled to `canvas`.
///
/// Paths are visited in document order with their absolute transforms applied. Quadratic
/// segments become cubics; a closed subpath gets an explicit closing line when its last
/// point differs from its first. Only solid paints are read; anything else counts as
/// unfilled / unstroked.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn load_document(bytes: &[u8], canvas: Size) -> PenlineResult<Document> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

    let svg_size = tree.size();
    let (sw, sh) = (f64::from(svg_size.width()), f64::from(svg_size.height()));
    if sw <= 0.0 || sh <= 0.0 {
        return Err(PenlineError::svg("svg has an empty viewport"));
    }
    let to_canvas = Affine::scale_non_uniform(canvas.width / sw, canvas.height / sh);

    let mut doc = Document::new(canvas);
    let mut unnamed = 0usize;
    walk(tree.root(), to_canvas, &mut doc, &mut unnamed);
    tracing::debug!(elements = doc.len(), "svg loaded");
    Ok(doc)
}

/// Read and parse an SVG file.
pub fn load_document_file(path: &Path, canvas: Size) -> PenlineResult<Document> {
    let bytes = std::fs::read(path).with_context(|| format!("read svg {}", path.display()))?;
    load_document(&bytes, canvas)
}

fn walk(group: &usvg::Group, to_canvas: Affine, doc: &mut Document, unnamed: &mut usize) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => walk(g, to_canvas, doc, unnamed),
            usvg::Node::Path(p) => push_path(p, to_canvas, doc, unnamed),
            _ => {}
        }
    }
}

fn affine_from_usvg(t: usvg::Transform) -> Affine {
    Affine::new([
        f64::from(t.sx),
        f64::from(t.ky),
        f64::from(t.kx),
        f64::from(t.sy),
        f64::from(t.tx),
        f64::from(t.ty),
    ])
}

fn solid(paint: &usvg::Paint, opacity: f32) -> Option<Rgba> {
    match paint {
        usvg::Paint::Color(c) => {
            Some(Rgba::from_rgba8(c.red, c.green, c.blue, 255).with_alpha(f64::from(opacity)))
        }
        _ => None,
    }
}

fn push_path(p: &usvg::Path, to_canvas: Affine, doc: &mut Document, unnamed: &mut usize) {
    let map = to_canvas * affine_from_usvg(p.abs_transform());
    let shape = if p.id().is_empty() {
        *unnamed += 1;
        format!("path{unnamed}")
    } else {
        p.id().to_owned()
    };

    let style = ElementStyle {
        fill: p
            .fill()
            .and_then(|f| solid(f.paint(), f.opacity().get()))
            .unwrap_or(Rgba::TRANSPARENT),
        stroke: p.stroke().and_then(|s| solid(s.paint(), s.opacity().get())),
        stroke_width: p
            .stroke()
            .map(|s| f64::from(s.width().get()) * map.determinant().abs().sqrt()),
    };

    let pt = |q: usvg::tiny_skia_path::Point| map * Point::new(f64::from(q.x), f64::from(q.y));
    let shape: std::sync::Arc<str> = shape.into();
    let mut cur = Point::ZERO;
    let mut sub_start = Point::ZERO;

    for seg in p.data().segments() {
        match seg {
            PathSegment::MoveTo(q) => {
                cur = pt(q);
                sub_start = cur;
            }
            PathSegment::LineTo(q) => {
                let end = pt(q);
                doc.push(shape.clone(), Segment::Line { start: cur, end }, style);
                cur = end;
            }
            PathSegment::QuadTo(c, q) => {
                let (c, end) = (pt(c), pt(q));
                let segment = Segment::Cubic {
                    start: cur,
                    ctrl1: cur + (c - cur) * (2.0 / 3.0),
                    ctrl2: end + (c - end) * (2.0 / 3.0),
                    end,
                };
                doc.push(shape.clone(), segment, style);
                cur = end;
            }
            PathSegment::CubicTo(c1, c2, q) => {
                let end = pt(q);
                let segment = Segment::Cubic {
                    start: cur,
                    ctrl1: pt(c1),
                    ctrl2: pt(c2),
                    end,
                };
                doc.push(shape.clone(), segment, style);
                cur = end;
            }
            PathSegment::Close => {
                if cur != sub_start {
                    doc.push(
                        shape.clone(),
                        Segment::Line {
                            start: cur,
                            end: sub_start,
                        },
                        style,
                    );
                }
                cur = sub_start;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
