use crate::foundation::error::PenlineResult;
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Playback rate of the sequence.
    pub fps: f64,
}

/// Consumer of rendered frames.
///
/// `push_frame` is called with strictly increasing indices, between one `begin` and one `end`.
pub trait FrameSink: Send {
    fn begin(&mut self, cfg: SinkConfig) -> PenlineResult<()>;
    fn push_frame(&mut self, idx: usize, frame: &FrameRGBA) -> PenlineResult<()>;
    fn end(&mut self) -> PenlineResult<()>;
}

/// Push every frame of a sequence through `sink`.
pub fn write_all(sink: &mut dyn FrameSink, frames: &[FrameRGBA], fps: f64) -> PenlineResult<()> {
    let Some(first) = frames.first() else {
        return Err(crate::foundation::error::PenlineError::encode(
            "no frames to write",
        ));
    };
    sink.begin(SinkConfig {
        width: first.width,
        height: first.height,
        fps,
    })?;
    for (i, frame) in frames.iter().enumerate() {
        sink.push_frame(i, frame)?;
    }
    sink.end()
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(usize, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    pub fn frames(&self) -> &[(usize, FrameRGBA)] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> PenlineResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &FrameRGBA) -> PenlineResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> PenlineResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &std::path::Path) -> PenlineResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Check that `frame` matches the configured size.
pub(crate) fn check_frame(cfg: &SinkConfig, frame: &FrameRGBA) -> PenlineResult<()> {
    if frame.width != cfg.width || frame.height != cfg.height {
        return Err(crate::foundation::error::PenlineError::validation(format!(
            "frame size mismatch: got {}x{}, expected {}x{}",
            frame.width, frame.height, cfg.width, cfg.height
        )));
    }
    if frame.data.len() != frame.width as usize * frame.height as usize * 4 {
        return Err(crate::foundation::error::PenlineError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
