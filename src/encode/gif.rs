use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::encode::sink::{FrameSink, SinkConfig, check_frame, ensure_parent_dir};
use crate::foundation::error::{PenlineError, PenlineResult};
use crate::render::backend::FrameRGBA;

/// Animated GIF output, looping forever, one frame every `1 / fps` seconds.
pub struct GifSink {
    path: PathBuf,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    cfg: Option<SinkConfig>,
    delay: image::Delay,
}

impl GifSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoder: None,
            cfg: None,
            delay: image::Delay::from_numer_denom_ms(1000, 30),
        }
    }
}

/// Per-frame delay for `fps`; GIF timing has centisecond resolution.
pub(crate) fn frame_delay_ms(fps: f64) -> u32 {
    let ms = (1000.0 / fps).round();
    (ms as u32).max(10)
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> PenlineResult<()> {
        if !cfg.fps.is_finite() || cfg.fps <= 0.0 {
            return Err(PenlineError::validation("fps must be positive"));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(PenlineError::validation("gif width/height must fit in u16"));
        }
        ensure_parent_dir(&self.path)?;
        let file = File::create(&self.path)
            .with_context(|| format!("create gif {}", self.path.display()))?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder
            .set_repeat(Repeat::Infinite)
            .context("set gif repeat")?;

        self.delay = image::Delay::from_numer_denom_ms(frame_delay_ms(cfg.fps), 1);
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, _idx: usize, frame: &FrameRGBA) -> PenlineResult<()> {
        let (Some(cfg), Some(encoder)) = (self.cfg.as_ref(), self.encoder.as_mut()) else {
            return Err(PenlineError::encode("gif sink not started"));
        };
        check_frame(cfg, frame)?;
        let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba8())
            .ok_or_else(|| PenlineError::encode("frame buffer does not match its size"))?;
        encoder
            .encode_frame(image::Frame::from_parts(img, 0, 0, self.delay))
            .context("encode gif frame")?;
        Ok(())
    }

    fn end(&mut self) -> PenlineResult<()> {
        if self.encoder.take().is_none() {
            return Err(PenlineError::encode("gif sink not started"));
        }
        self.cfg = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
