use super::*;

#[test]
fn defaults_match_documented_values() {
    let d = DrawOptions::default();
    assert!(!d.animate && d.fill);
    assert_eq!(d.mode, CompositionMode::Sequential);
    assert_eq!(d.line_width, 1.0);
    assert_eq!(d.line_color, Rgba::BLACK);
    assert_eq!(d.segment_duration, 0.02);
    assert_eq!(d.fps, 30.0);
    assert_eq!(d.hand.scale, 0.30);
    assert_eq!(d.hand.offset_vec(), Vec2::new(-15.0, -140.0));

    let r = RendererOptions::default();
    assert_eq!((r.width, r.height), (512, 512));
    assert_eq!(r.background, Rgba::TRANSPARENT);
    assert!(r.max_frames > 0);
}

#[test]
fn partial_json_fills_in_defaults() {
    let cfg = ConfigFile::from_json_str(
        r##"{
            "renderer": { "width": 64, "height": 32, "background": "#ffffff" },
            "draw": { "animate": true, "mode": "par", "ease": "out_bounce", "line_color": [1, 0, 0] }
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.renderer.canvas().unwrap(), Canvas::new(64, 32).unwrap());
    assert_eq!(cfg.renderer.background, Rgba::new(1.0, 1.0, 1.0, 1.0));
    assert!(cfg.draw.animate);
    assert_eq!(cfg.draw.mode, CompositionMode::Parallel);
    assert_eq!(cfg.draw.ease, Ease::OutBounce);
    assert_eq!(cfg.draw.line_color, Rgba::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(cfg.draw.fps, 30.0);
}

#[test]
fn malformed_config_is_rejected() {
    assert!(ConfigFile::from_json_str(r##"{"draw": {"line_color": "#zz"}}"##).is_err());
    assert!(ConfigFile::from_json_str(r#"{"draw": {"mode": "sideways"}}"#).is_err());
}
