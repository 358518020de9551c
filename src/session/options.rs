use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::foundation::core::{Canvas, Rgba8Premul, Vec2};
use crate::foundation::error::PenlineResult;
use crate::render::hand::{DEFAULT_HAND_OFFSET, DEFAULT_HAND_SCALE};
use crate::scene::color::Rgba;
use crate::timeline::resolver::CompositionMode;

/// Environment variable overriding [`RendererOptions::max_frames`].
pub const MAX_FRAMES_ENV: &str = "PENLINE_MAX_FRAMES";
const DEFAULT_MAX_FRAMES: usize = 20_000;

/// Settings for one draw request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    /// Produce a frame sequence instead of a single static frame.
    pub animate: bool,
    pub mode: CompositionMode,
    /// Fill shapes after the strokes are drawn.
    pub fill: bool,
    pub line_width: f64,
    pub line_color: Rgba,
    /// Seconds spent drawing each path element.
    pub segment_duration: f64,
    pub fps: f64,
    pub ease: Ease,
    pub hand: HandOptions,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            animate: false,
            mode: CompositionMode::Sequential,
            fill: true,
            line_width: 1.0,
            line_color: Rgba::BLACK,
            segment_duration: 0.02,
            fps: 30.0,
            ease: Ease::Linear,
            hand: HandOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandOptions {
    pub enabled: bool,
    pub image: Option<PathBuf>,
    pub scale: f64,
    /// Offset of the image's top-left corner from the pen position, in pixels.
    pub offset: [f64; 2],
}

impl HandOptions {
    pub fn offset_vec(&self) -> Vec2 {
        Vec2::new(self.offset[0], self.offset[1])
    }
}

impl Default for HandOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            image: None,
            scale: DEFAULT_HAND_SCALE,
            offset: [DEFAULT_HAND_OFFSET.x, DEFAULT_HAND_OFFSET.y],
        }
    }
}

/// Settings fixed for the lifetime of a [`crate::Renderer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererOptions {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    /// Upper bound on frames per draw; longer animations are resampled down to it.
    pub max_frames: usize,
}

impl RendererOptions {
    pub fn canvas(&self) -> PenlineResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    pub fn background_premul(&self) -> Rgba8Premul {
        self.background.to_premul()
    }
}

impl Default for RendererOptions {
    fn default() -> Self {
        let max_frames = std::env::var(MAX_FRAMES_ENV)
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_MAX_FRAMES);
        Self {
            width: 512,
            height: 512,
            background: Rgba::TRANSPARENT,
            max_frames,
        }
    }
}

/// JSON configuration file: `{ "renderer": {...}, "draw": {...} }`, both optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub renderer: RendererOptions,
    pub draw: DrawOptions,
}

impl ConfigFile {
    pub fn from_json_str(s: &str) -> PenlineResult<Self> {
        Ok(serde_json::from_str(s).context("parse config json")?)
    }

    pub fn from_path(path: &Path) -> PenlineResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/options.rs"]
mod tests;
