//! Frame composition and the drawing session.

/// Frame grid, fill-reveal window and hand placement.
pub(crate) mod compositor;
/// Serde configuration for draws and renderers.
pub(crate) mod options;
/// The [`crate::Renderer`] session.
pub(crate) mod renderer;
