use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use penline::{CompositionMode, ConfigFile, DrawOptions, Ease, Renderer, Rgba};

#[derive(Parser, Debug)]
#[command(name = "penline", version)]
struct Cli {
    /// Log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the finished image as a PNG.
    Draw(DrawArgs),
    /// Render the drawing animation to a GIF, an MP4 (requires `ffmpeg` on PATH), or a
    /// directory of PNG frames.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct DrawArgs {
    /// Input SVG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Input SVG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path: `.gif`, `.mp4`, or a directory for PNG frames.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    style: StyleArgs,

    /// `seq` or `par`.
    #[arg(long)]
    mode: Option<CompositionMode>,

    /// Easing function name, e.g. `in_out_quad`.
    #[arg(long)]
    ease: Option<Ease>,

    /// Seconds per path segment.
    #[arg(long)]
    segment_duration: Option<f64>,

    #[arg(long)]
    fps: Option<f64>,

    /// Draw a hand image at the pen position.
    #[arg(long)]
    hand: Option<PathBuf>,

    #[arg(long)]
    hand_scale: Option<f64>,

    /// Filename prefix for PNG frame directories.
    #[arg(long, default_value = "frame")]
    prefix: String,
}

#[derive(Parser, Debug)]
struct StyleArgs {
    /// JSON options file (`{"renderer": {...}, "draw": {...}}`).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Background color (`#RRGGBB[AA]`).
    #[arg(long)]
    background: Option<Rgba>,

    /// Default stroke color (`#RRGGBB[AA]`).
    #[arg(long)]
    line_color: Option<Rgba>,

    #[arg(long)]
    line_width: Option<f64>,

    /// Skip the fill pass.
    #[arg(long, default_value_t = false)]
    no_fill: bool,
}

impl StyleArgs {
    fn load(&self) -> anyhow::Result<ConfigFile> {
        let mut cfg = match &self.config {
            Some(path) => ConfigFile::from_path(path)?,
            None => ConfigFile::default(),
        };
        if let Some(w) = self.width {
            cfg.renderer.width = w;
        }
        if let Some(h) = self.height {
            cfg.renderer.height = h;
        }
        if let Some(bg) = self.background {
            cfg.renderer.background = bg;
        }
        if let Some(c) = self.line_color {
            cfg.draw.line_color = c;
        }
        if let Some(w) = self.line_width {
            cfg.draw.line_width = w;
        }
        if self.no_fill {
            cfg.draw.fill = false;
        }
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Draw(args) => cmd_draw(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn cmd_draw(args: DrawArgs) -> anyhow::Result<()> {
    let cfg = args.style.load()?;
    let draw = DrawOptions {
        animate: false,
        ..cfg.draw
    };
    let mut renderer = Renderer::new(cfg.renderer)?;
    renderer.draw_file(&args.in_path, &draw)?;
    renderer.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let cfg = args.style.load()?;
    let mut draw = DrawOptions {
        animate: true,
        ..cfg.draw
    };
    if let Some(mode) = args.mode {
        draw.mode = mode;
    }
    if let Some(ease) = args.ease {
        draw.ease = ease;
    }
    if let Some(d) = args.segment_duration {
        draw.segment_duration = d;
    }
    if let Some(fps) = args.fps {
        draw.fps = fps;
    }
    if let Some(hand) = args.hand {
        draw.hand.enabled = true;
        draw.hand.image = Some(hand);
    }
    if let Some(scale) = args.hand_scale {
        draw.hand.scale = scale;
    }

    let mut renderer = Renderer::new(cfg.renderer)?;
    let frames = renderer.draw_file(&args.in_path, &draw)?;
    match Output::for_path(&args.out) {
        Output::Gif => renderer.save_gif(&args.out)?,
        Output::Mp4 => renderer.save_mp4(&args.out)?,
        Output::PngDir => {
            renderer
                .save_png_sequence(&args.out, &args.prefix)
                .with_context(|| format!("write frames to '{}'", args.out.display()))?;
        }
    }

    eprintln!("wrote {} ({frames} frames)", args.out.display());
    Ok(())
}

enum Output {
    Gif,
    Mp4,
    PngDir,
}

impl Output {
    fn for_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("gif") => Self::Gif,
            Some("mp4") => Self::Mp4,
            _ => Self::PngDir,
        }
    }
}
