//! Output sinks.
//!
//! Sinks consume rendered frames in order; the renderer drives them from its frame buffer.

/// MP4 output through the system `ffmpeg`.
pub(crate) mod ffmpeg;
/// Animated GIF output.
pub(crate) mod gif;
/// Single PNG files and PNG sequences.
pub(crate) mod png;
/// Frame sink trait and the in-memory sink.
pub(crate) mod sink;
