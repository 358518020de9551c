use std::path::Path;

use anyhow::Context;

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{PenlineError, PenlineResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::backend::DrawSurface;

pub const DEFAULT_HAND_SCALE: f64 = 0.30;
pub const DEFAULT_HAND_OFFSET: Vec2 = Vec2::new(-15.0, -140.0);
const MIN_SCALE: f64 = 0.01;
const MAX_SCALE: f64 = 2.0;

#[derive(Clone, Debug)]
struct Scaled {
    width: u32,
    height: u32,
    rgba8_premul: Vec<u8>,
}

/// Image drawn at the pen position while strokes are being drawn.
///
/// The image's top-left corner goes to `anchor + offset`. A hand without an image draws
/// nothing.
#[derive(Clone, Debug)]
pub struct HandOverlay {
    source: Option<image::RgbaImage>,
    scaled: Option<Scaled>,
    scale: f64,
    offset: Vec2,
}

impl HandOverlay {
    pub fn disabled() -> Self {
        Self {
            source: None,
            scaled: None,
            scale: DEFAULT_HAND_SCALE,
            offset: DEFAULT_HAND_OFFSET,
        }
    }

    /// Load the hand image from disk; a missing or undecodable file leaves the hand unloaded.
    pub fn load(path: &Path, scale: f64, offset: Vec2) -> Self {
        let mut hand = Self::disabled();
        hand.offset = offset;
        match decode_file(path) {
            Ok(img) => hand.source = Some(img),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "hand image not loaded");
            }
        }
        hand.set_scale(scale);
        hand
    }

    /// Build from straight-alpha RGBA8 pixels.
    pub fn from_rgba8(
        width: u32,
        height: u32,
        rgba8: Vec<u8>,
        scale: f64,
        offset: Vec2,
    ) -> PenlineResult<Self> {
        let img = image::RgbaImage::from_raw(width, height, rgba8).ok_or_else(|| {
            PenlineError::validation(format!(
                "hand image buffer does not match {width}x{height} rgba8"
            ))
        })?;
        let mut hand = Self::disabled();
        hand.source = Some(img);
        hand.offset = offset;
        hand.set_scale(scale);
        Ok(hand)
    }

    pub fn is_loaded(&self) -> bool {
        self.scaled.is_some()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the scale factor, clamped to `[0.01, 2.0]`, and rescale the image.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = if scale.is_nan() {
            DEFAULT_HAND_SCALE
        } else {
            scale.clamp(MIN_SCALE, MAX_SCALE)
        };
        self.scaled = self.source.as_ref().map(|img| rescale(img, self.scale));
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Scaled image size, when loaded.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.scaled.as_ref().map(|s| (s.width, s.height))
    }

    /// Top-left pixel position for a pen at `anchor`.
    pub fn placement(&self, anchor: Point) -> (i64, i64) {
        let p = anchor + self.offset;
        (p.x.round() as i64, p.y.round() as i64)
    }

    /// Composite the hand for a pen at `anchor`.
    ///
    /// Returns whether any part of the image landed on the surface; a hand placed fully
    /// off-canvas is skipped.
    pub fn draw(&self, surface: &mut dyn DrawSurface, anchor: Point) -> bool {
        let Some(img) = &self.scaled else {
            return false;
        };
        if !anchor.x.is_finite() || !anchor.y.is_finite() {
            return false;
        }
        let (x, y) = self.placement(anchor);
        let canvas = surface.canvas();
        let visible = x < i64::from(canvas.width)
            && y < i64::from(canvas.height)
            && x.saturating_add(i64::from(img.width)) > 0
            && y.saturating_add(i64::from(img.height)) > 0;
        if visible {
            surface.blit_premul(x, y, img.width, img.height, &img.rgba8_premul);
        }
        visible
    }
}

impl Default for HandOverlay {
    fn default() -> Self {
        Self::disabled()
    }
}

fn decode_file(path: &Path) -> anyhow::Result<image::RgbaImage> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let img = image::load_from_memory(&bytes).context("decode hand image")?;
    Ok(img.to_rgba8())
}

fn rescale(img: &image::RgbaImage, scale: f64) -> Scaled {
    let (w, h) = img.dimensions();
    let sw = ((f64::from(w) * scale).round() as u32).max(1);
    let sh = ((f64::from(h) * scale).round() as u32).max(1);
    let resized = if (sw, sh) == (w, h) {
        img.clone()
    } else {
        image::imageops::resize(img, sw, sh, image::imageops::FilterType::Triangle)
    };

    let mut data = resized.into_raw();
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        px[0] = mul_div255_u8(u16::from(px[0]), a);
        px[1] = mul_div255_u8(u16::from(px[1]), a);
        px[2] = mul_div255_u8(u16::from(px[2]), a);
    }
    Scaled {
        width: sw,
        height: sh,
        rgba8_premul: data,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/hand.rs"]
mod tests;
