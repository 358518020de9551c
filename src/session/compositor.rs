//! Frame compositor: drives a [`Timeline`] across a fixed frame grid and rasterizes each
//! frame, with an optional fill-reveal window and pen-hand overlay.

use crate::animation::unit::AnimUnit;
use crate::foundation::core::Point;
use crate::render::backend::{DrawSurface, FrameRGBA};
use crate::render::fills::render_fills;
use crate::render::hand::HandOverlay;
use crate::render::strokes::render_strokes;
use crate::scene::color::Rgba;
use crate::scene::path::{Document, FillShape};
use crate::timeline::holder::PropertyHolder;
use crate::timeline::keys::{Attr, PropKey};
use crate::timeline::resolver::{CompositionMode, Timeline};

/// Length of the fill-reveal window appended after the strokes, in seconds.
pub const FILL_REVEAL_SECS: f64 = 0.4;
/// Strokes stop being drawn once the fill is at least this opaque.
pub const STROKE_FADE_THRESHOLD: f64 = 0.99;

/// Frame grid for one animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePlan {
    pub stroke_duration: f64,
    pub total_duration: f64,
    /// Number of intervals; the sequence has `num_frames + 1` frames.
    pub num_frames: usize,
}

impl FramePlan {
    pub fn frame_count(&self) -> usize {
        self.num_frames + 1
    }

    /// Timestamp of frame `i`.
    pub fn time(&self, i: usize) -> f64 {
        i as f64 / self.num_frames as f64 * self.total_duration
    }
}

/// Lay out the frame grid: `max(1, floor(total * fps))` intervals, capped so the sequence
/// holds at most `max_frames` frames.
pub fn plan_frames(stroke_duration: f64, fill: bool, fps: f64, max_frames: usize) -> FramePlan {
    let stroke_duration = if stroke_duration.is_finite() {
        stroke_duration.max(0.0)
    } else {
        0.0
    };
    let total_duration = if fill {
        stroke_duration + FILL_REVEAL_SECS
    } else {
        stroke_duration
    };

    let raw = (total_duration * fps).floor();
    let mut num_frames = if raw.is_finite() && raw >= 1.0 {
        raw as usize
    } else {
        1
    };
    let cap = max_frames.saturating_sub(1).max(1);
    if num_frames > cap {
        tracing::warn!(
            requested = num_frames + 1,
            max_frames,
            "frame count capped; animation will be resampled"
        );
        num_frames = cap;
    }

    FramePlan {
        stroke_duration,
        total_duration,
        num_frames,
    }
}

/// What was drawn in one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameInfo {
    pub index: usize,
    pub time: f64,
    /// Active unit, `None` once every unit is complete.
    pub active: Option<usize>,
    pub mesh_opacity: f64,
    /// Fill-reveal progress, present inside the fill window.
    pub fill_progress: Option<f64>,
    pub strokes_drawn: bool,
    /// Pen position the hand was drawn at.
    pub hand_anchor: Option<Point>,
}

/// Per-request drawing settings consumed by the compositor.
#[derive(Clone, Copy, Debug)]
pub struct ComposeSettings<'a> {
    pub mode: CompositionMode,
    pub fill: bool,
    pub fps: f64,
    pub line_color: Rgba,
    pub line_width: f64,
    pub max_frames: usize,
    pub hand: Option<&'a HandOverlay>,
}

/// Frames plus the per-frame trace.
#[derive(Clone, Debug, Default)]
pub struct Composition {
    pub frames: Vec<FrameRGBA>,
    pub trace: Vec<FrameInfo>,
}

/// Render the animation list into a frame sequence.
///
/// `holder` must already hold every element's starting geometry. An empty list produces
/// a single frame of the static drawing.
#[tracing::instrument(skip_all, fields(units = units.len(), fps = settings.fps))]
pub fn compose(
    surface: &mut dyn DrawSurface,
    holder: &mut PropertyHolder,
    doc: &Document,
    units: Vec<AnimUnit>,
    settings: &ComposeSettings<'_>,
) -> Composition {
    let shapes = doc.fill_shapes();
    if units.is_empty() {
        return compose_static(surface, holder, doc, &shapes, settings);
    }

    let timeline = Timeline::new(units, settings.mode, holder);
    let plan = plan_frames(
        timeline.duration(),
        settings.fill,
        settings.fps,
        settings.max_frames,
    );
    tracing::debug!(
        stroke_duration = plan.stroke_duration,
        total_duration = plan.total_duration,
        frames = plan.frame_count(),
        "frame plan"
    );

    let mut out = Composition {
        frames: Vec::with_capacity(plan.frame_count()),
        trace: Vec::with_capacity(plan.frame_count()),
    };
    for index in 0..=plan.num_frames {
        let time = plan.time(index);
        let active = timeline.resolve(time, holder);
        surface.clear();

        let in_fill_window = settings.fill && time >= plan.stroke_duration;
        let (fill_progress, strokes_drawn) = if in_fill_window {
            let progress = if index == plan.num_frames {
                1.0
            } else {
                ((time - plan.stroke_duration) / FILL_REVEAL_SECS).clamp(0.0, 1.0)
            };
            holder.set(PropKey::MeshOpacity, progress);
            render_fills(surface, holder, &shapes, settings.line_color);
            let strokes = progress < STROKE_FADE_THRESHOLD;
            if strokes {
                render_strokes(surface, holder, doc, settings.line_color, settings.line_width);
            }
            (Some(progress), strokes)
        } else {
            holder.set(PropKey::MeshOpacity, 0.0);
            render_strokes(surface, holder, doc, settings.line_color, settings.line_width);
            (None, true)
        };

        let mut hand_anchor = None;
        if let Some(hand) = settings.hand
            && time < plan.stroke_duration
            && let Some(anchor) = active.and_then(|i| pen_position(&timeline.units()[i], holder))
            && hand.draw(surface, anchor)
        {
            hand_anchor = Some(anchor);
        }

        out.frames.push(surface.snapshot());
        out.trace.push(FrameInfo {
            index,
            time,
            active,
            mesh_opacity: holder.mesh_opacity(),
            fill_progress,
            strokes_drawn,
            hand_anchor,
        });
    }
    out
}

/// One frame of the fully drawn document: fills (when enabled) under strokes.
pub fn compose_static(
    surface: &mut dyn DrawSurface,
    holder: &mut PropertyHolder,
    doc: &Document,
    shapes: &[FillShape],
    settings: &ComposeSettings<'_>,
) -> Composition {
    surface.clear();
    let opacity = if settings.fill { 1.0 } else { 0.0 };
    holder.set(PropKey::MeshOpacity, opacity);
    if settings.fill {
        render_fills(surface, holder, shapes, settings.line_color);
    }
    render_strokes(surface, holder, doc, settings.line_color, settings.line_width);

    Composition {
        frames: vec![surface.snapshot()],
        trace: vec![FrameInfo {
            index: 0,
            time: 0.0,
            active: None,
            mesh_opacity: opacity,
            fill_progress: None,
            strokes_drawn: true,
            hand_anchor: None,
        }],
    }
}

/// End point of the element a unit draws, as currently held.
fn pen_position(unit: &AnimUnit, holder: &PropertyHolder) -> Option<Point> {
    let end = unit
        .targets()
        .keys()
        .find(|k| k.is_end_position())?
        .as_element()?;
    let x = holder.scalar(&PropKey::Element(end.with_attr(Attr::EndX)))?;
    let y = holder.scalar(&PropKey::Element(end.with_attr(Attr::EndY)))?;
    Some(Point::new(x, y))
}

#[cfg(test)]
#[path = "../../tests/unit/session/compositor.rs"]
mod tests;
