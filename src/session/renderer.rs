use std::path::{Path, PathBuf};

use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::gif::GifSink;
use crate::encode::png::{PngSequenceSink, write_png};
use crate::encode::sink::{FrameSink, write_all};
use crate::foundation::core::Canvas;
use crate::foundation::error::{PenlineError, PenlineResult};
use crate::render::backend::{DrawSurface, FrameRGBA};
use crate::render::cpu::CpuSurface;
use crate::render::hand::HandOverlay;
use crate::scene::builder::build_animation_list;
use crate::scene::path::Document;
use crate::scene::svg::{load_document, load_document_file};
use crate::session::compositor::{
    ComposeSettings, Composition, FrameInfo, compose, compose_static,
};
use crate::session::options::{DrawOptions, HandOptions, RendererOptions};
use crate::timeline::holder::PropertyHolder;

/// Where an SVG document comes from.
#[derive(Clone, Copy, Debug)]
pub enum SvgSource<'a> {
    File(&'a Path),
    Data(&'a [u8]),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum SourceKey {
    File(PathBuf),
    Data(Vec<u8>),
}

impl From<SvgSource<'_>> for SourceKey {
    fn from(src: SvgSource<'_>) -> Self {
        match src {
            SvgSource::File(p) => Self::File(p.to_path_buf()),
            SvgSource::Data(b) => Self::Data(b.to_vec()),
        }
    }
}

/// Drawing session over one canvas.
///
/// A renderer keeps the last parsed document, so redrawing the same source with different
/// options skips parsing. Every draw replaces the stored frame sequence.
pub struct Renderer {
    options: RendererOptions,
    canvas: Canvas,
    surface: CpuSurface,
    holder: PropertyHolder,

    cached: Option<(SourceKey, Document)>,
    hand: Option<(PathBuf, HandOverlay)>,

    last: Composition,
    fps: f64,
}

impl Renderer {
    pub fn new(options: RendererOptions) -> PenlineResult<Self> {
        let canvas = options.canvas()?;
        if options.max_frames < 2 {
            return Err(PenlineError::validation("max_frames must be at least 2"));
        }
        let surface = CpuSurface::new(canvas, options.background_premul())?;
        Ok(Self {
            options,
            canvas,
            surface,
            holder: PropertyHolder::new(),
            cached: None,
            hand: None,
            last: Composition::default(),
            fps: DrawOptions::default().fps,
        })
    }

    pub fn options(&self) -> &RendererOptions {
        &self.options
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Draw an SVG source, parsing it only when it differs from the previous draw.
    ///
    /// Returns the number of frames produced.
    pub fn draw(&mut self, source: SvgSource<'_>, opts: &DrawOptions) -> PenlineResult<usize> {
        let key = SourceKey::from(source);
        let doc = match self.cached.take() {
            Some((cached_key, doc)) if cached_key == key => doc,
            _ => {
                let size = self.canvas.size();
                match source {
                    SvgSource::File(path) => load_document_file(path, size)?,
                    SvgSource::Data(bytes) => load_document(bytes, size)?,
                }
            }
        };
        let result = self.draw_document(&doc, opts);
        self.cached = Some((key, doc));
        result
    }

    pub fn draw_file(&mut self, path: &Path, opts: &DrawOptions) -> PenlineResult<usize> {
        self.draw(SvgSource::File(path), opts)
    }

    pub fn draw_svg(&mut self, data: &[u8], opts: &DrawOptions) -> PenlineResult<usize> {
        self.draw(SvgSource::Data(data), opts)
    }

    /// Draw an already loaded document.
    #[tracing::instrument(skip_all, fields(elements = doc.len(), animate = opts.animate))]
    pub fn draw_document(&mut self, doc: &Document, opts: &DrawOptions) -> PenlineResult<usize> {
        self.holder.reset();
        let segment_duration = if opts.segment_duration.is_finite() && opts.segment_duration > 0.0
        {
            opts.segment_duration
        } else {
            0.0
        };
        let units = build_animation_list(
            doc,
            &mut self.holder,
            opts.animate,
            segment_duration,
            opts.ease,
        )?;

        let hand_wanted = opts.animate && opts.hand.enabled;
        if hand_wanted {
            self.sync_hand(&opts.hand);
        }
        let settings = ComposeSettings {
            mode: opts.mode,
            fill: opts.fill,
            fps: opts.fps,
            line_color: opts.line_color,
            line_width: opts.line_width,
            max_frames: self.options.max_frames,
            hand: self
                .hand
                .as_ref()
                .filter(|_| hand_wanted)
                .map(|(_, hand)| hand),
        };

        self.last = if opts.animate {
            compose(&mut self.surface, &mut self.holder, doc, units, &settings)
        } else {
            let shapes = doc.fill_shapes();
            compose_static(&mut self.surface, &mut self.holder, doc, &shapes, &settings)
        };
        self.fps = opts.fps;
        tracing::debug!(frames = self.last.frames.len(), "draw complete");
        Ok(self.last.frames.len())
    }

    fn sync_hand(&mut self, opts: &HandOptions) {
        let Some(path) = opts.image.as_deref() else {
            tracing::warn!("hand enabled without an image; drawing without it");
            self.hand = None;
            return;
        };
        match self.hand.as_mut() {
            Some((loaded, hand)) if loaded.as_path() == path => {
                hand.set_scale(opts.scale);
                hand.set_offset(opts.offset_vec());
            }
            _ => {
                let hand = HandOverlay::load(path, opts.scale, opts.offset_vec());
                self.hand = Some((path.to_path_buf(), hand));
            }
        }
    }

    /// Frames of the most recent draw.
    pub fn frames(&self) -> &[FrameRGBA] {
        &self.last.frames
    }

    /// Per-frame trace of the most recent draw.
    pub fn trace(&self) -> &[FrameInfo] {
        &self.last.trace
    }

    /// Current canvas contents: the last frame drawn.
    pub fn image(&self) -> Option<&FrameRGBA> {
        self.last.frames.last()
    }

    /// Frame rate used by the most recent draw.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Reset the canvas and drop every stored frame and property.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.holder.reset();
        self.last = Composition::default();
    }

    /// Stream every stored frame into `sink`.
    pub fn write_to(&self, sink: &mut dyn FrameSink) -> PenlineResult<()> {
        write_all(sink, &self.last.frames, self.fps)
    }

    /// Save the current canvas as a PNG.
    pub fn save_png(&self, path: &Path) -> PenlineResult<()> {
        let frame = self
            .image()
            .ok_or_else(|| PenlineError::encode("nothing has been drawn"))?;
        write_png(frame, path)
    }

    pub fn save_gif(&self, path: &Path) -> PenlineResult<()> {
        self.write_to(&mut GifSink::new(path))
    }

    /// Encode the stored frames as MP4; transparency is flattened over the background,
    /// or white when the background is transparent.
    pub fn save_mp4(&self, path: &Path) -> PenlineResult<()> {
        let mut opts = FfmpegSinkOpts::new(path);
        let [r, g, b, a] = self.options.background.to_rgba8();
        if a > 0 {
            opts.bg_rgba = [r, g, b, 255];
        }
        self.write_to(&mut FfmpegSink::new(opts))
    }

    /// Write `<dir>/<prefix>_00000.png`, ... and return the written paths.
    pub fn save_png_sequence(&self, dir: &Path, prefix: &str) -> PenlineResult<Vec<PathBuf>> {
        let mut sink = PngSequenceSink::new(dir, prefix);
        self.write_to(&mut sink)?;
        Ok(sink.written().to_vec())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/renderer.rs"]
mod tests;
