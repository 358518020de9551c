use super::*;

const LINE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64">
  <path id="stroke" d="M8 32 L56 32" fill="none" stroke="#000000" stroke-width="4"/>
</svg>"##;

fn renderer() -> Renderer {
    Renderer::new(RendererOptions {
        width: 64,
        height: 64,
        max_frames: 1_000,
        ..RendererOptions::default()
    })
    .unwrap()
}

fn animated(fps: f64) -> DrawOptions {
    DrawOptions {
        animate: true,
        fill: false,
        segment_duration: 0.5,
        fps,
        ..DrawOptions::default()
    }
}

fn alpha(frame: &FrameRGBA, x: u32, y: u32) -> u8 {
    frame.pixel(x, y).unwrap()[3]
}

#[test]
fn rejects_invalid_options() {
    assert!(
        Renderer::new(RendererOptions {
            width: 0,
            ..RendererOptions::default()
        })
        .is_err()
    );
    assert!(
        Renderer::new(RendererOptions {
            max_frames: 1,
            ..RendererOptions::default()
        })
        .is_err()
    );
}

#[test]
fn static_draw_produces_one_finished_frame() {
    let mut r = renderer();
    let n = r.draw_svg(LINE.as_bytes(), &DrawOptions::default()).unwrap();
    assert_eq!(n, 1);
    let img = r.image().unwrap();
    assert_eq!((img.width, img.height), (64, 64));
    assert!(alpha(img, 32, 32) > 0);
    assert_eq!(alpha(img, 32, 5), 0);
}

#[test]
fn animated_draw_grows_the_line() {
    let mut r = renderer();
    let n = r.draw_svg(LINE.as_bytes(), &animated(10.0)).unwrap();
    assert_eq!(n, 6);
    assert_eq!(r.trace().len(), 6);
    assert_eq!(r.fps(), 10.0);

    let first = &r.frames()[0];
    let last = &r.frames()[5];
    assert_eq!(alpha(first, 50, 32), 0);
    assert!(alpha(last, 50, 32) > 0);
    assert_eq!(r.trace()[5].active, None);
}

#[test]
fn unusable_segment_duration_draws_start_and_end_frames() {
    for duration in [-1.0, f64::NAN, f64::INFINITY] {
        let mut r = renderer();
        let opts = DrawOptions {
            segment_duration: duration,
            ..animated(10.0)
        };
        let n = r.draw_svg(LINE.as_bytes(), &opts).unwrap();
        assert_eq!(n, 2, "duration {duration}");
        assert!(alpha(&r.frames()[1], 50, 32) > 0);
    }
}

#[test]
fn same_source_reuses_parsed_document() {
    let mut r = renderer();
    r.draw_svg(LINE.as_bytes(), &DrawOptions::default()).unwrap();
    assert!(matches!(r.cached, Some((SourceKey::Data(_), ref doc)) if doc.len() == 1));
    r.draw_svg(LINE.as_bytes(), &animated(4.0)).unwrap();
    assert_eq!(r.frames().len(), 3);
    assert!(r.draw_svg(b"<svg", &DrawOptions::default()).is_err());
    assert!(r.cached.is_none());
}

#[test]
fn hand_follows_pen_while_drawing() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("hand.png");
    image::save_buffer(&png, &[255u8; 4 * 4 * 4], 4, 4, image::ColorType::Rgba8).unwrap();

    let mut opts = animated(10.0);
    opts.hand.enabled = true;
    opts.hand.image = Some(png);
    opts.hand.scale = 1.0;
    opts.hand.offset = [0.0, 0.0];

    let mut r = renderer();
    r.draw_svg(LINE.as_bytes(), &opts).unwrap();
    let trace = r.trace();
    let first = trace[0].hand_anchor.unwrap();
    assert!((first.x - 8.0).abs() < 1e-9);
    assert!((first.y - 32.0).abs() < 1e-9);
    assert!(trace[5].hand_anchor.is_none());
    assert_eq!(r.frames()[0].pixel(9, 33).unwrap(), [255, 255, 255, 255]);
}

#[test]
fn missing_hand_image_draws_without_hand() {
    let mut opts = animated(10.0);
    opts.hand.enabled = true;
    opts.hand.image = Some(PathBuf::from("/nonexistent/hand.png"));

    let mut r = renderer();
    r.draw_svg(LINE.as_bytes(), &opts).unwrap();
    assert!(r.trace().iter().all(|f| f.hand_anchor.is_none()));
}

#[test]
fn exports_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = renderer();
    assert!(r.save_png(&dir.path().join("none.png")).is_err());

    r.draw_svg(LINE.as_bytes(), &animated(4.0)).unwrap();
    r.save_png(&dir.path().join("last.png")).unwrap();
    let written = r.save_png_sequence(&dir.path().join("seq"), "f").unwrap();
    assert_eq!(written.len(), 3);
    assert!(written.iter().all(|p| p.is_file()));
    r.save_gif(&dir.path().join("a.gif")).unwrap();
    assert!(dir.path().join("a.gif").is_file());

    r.clear();
    assert!(r.frames().is_empty());
    assert!(r.image().is_none());
}
