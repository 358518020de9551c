//! Penline turns SVG documents into progressive "hand-drawn" path animations.
//!
//! Every path segment becomes an animation unit that grows the segment from its start point.
//! Units are composed in sequence or in parallel, resolved against a fixed frame grid, and
//! rasterized on the CPU:
//!
//! - Load an SVG into a [`Document`] (or let a [`Renderer`] do it)
//! - [`Renderer::draw`] a static frame or an animated frame sequence
//! - Export with [`Renderer::save_png`], [`Renderer::save_gif`], [`Renderer::save_mp4`], or any
//!   [`FrameSink`]
//!
//! The animation layer ([`Ease`], [`AnimUnit`], [`AnimTree`], [`Timeline`], [`Playback`]) is
//! usable on its own against any [`PropertyTarget`].
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod encode;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod session;
pub(crate) mod timeline;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rgba8Premul, Size, Vec2};
pub use crate::foundation::error::{PenlineError, PenlineResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::playback::{
    Playback, PlaybackEvent, PlaybackId, PlaybackSet, PlaybackState,
};
pub use crate::animation::unit::{AnimTree, AnimUnit, PropertyTarget};
pub use crate::animation::value::{AnimValue, Lerp};

pub use crate::timeline::holder::PropertyHolder;
pub use crate::timeline::keys::{Attr, ElementKey, ElementKind, PointAttr, PropKey};
pub use crate::timeline::resolver::{CompositionMode, Timeline, total_duration};

pub use crate::scene::builder::build_animation_list;
pub use crate::scene::color::Rgba;
pub use crate::scene::path::{Document, ElementStyle, FillShape, PathElement, Segment};
pub use crate::scene::svg::{load_document, load_document_file};

pub use crate::render::backend::{DrawSurface, FrameRGBA};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::fills::render_fills;
pub use crate::render::hand::{DEFAULT_HAND_OFFSET, DEFAULT_HAND_SCALE, HandOverlay};
pub use crate::render::recording::{DrawOp, RecordingSurface};
pub use crate::render::strokes::render_strokes;

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::gif::GifSink;
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig, ensure_parent_dir, write_all};

pub use crate::session::compositor::{
    ComposeSettings, Composition, FILL_REVEAL_SECS, FrameInfo, FramePlan, STROKE_FADE_THRESHOLD,
    compose, compose_static, plan_frames,
};
pub use crate::session::options::{
    ConfigFile, DrawOptions, HandOptions, MAX_FRAMES_ENV, RendererOptions,
};
pub use crate::session::renderer::{Renderer, SvgSource};
