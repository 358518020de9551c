use super::*;
use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::render::cpu::CpuSurface;
use crate::render::recording::{DrawOp, RecordingSurface};

fn solid(w: u32, h: u32) -> Vec<u8> {
    [255u8, 255, 255, 255].repeat((w * h) as usize)
}

#[test]
fn scale_is_clamped_and_resizes() {
    let mut hand = HandOverlay::from_rgba8(10, 10, solid(10, 10), 1.0, Vec2::ZERO).unwrap();
    assert_eq!(hand.size(), Some((10, 10)));
    hand.set_scale(5.0);
    assert_eq!(hand.scale(), 2.0);
    assert_eq!(hand.size(), Some((20, 20)));
    hand.set_scale(0.0);
    assert_eq!(hand.scale(), 0.01);
    assert_eq!(hand.size(), Some((1, 1)));
}

#[test]
fn buffer_size_mismatch_is_rejected() {
    assert!(HandOverlay::from_rgba8(4, 4, vec![0; 10], 1.0, Vec2::ZERO).is_err());
}

#[test]
fn draws_at_anchor_plus_offset() {
    let hand =
        HandOverlay::from_rgba8(4, 4, solid(4, 4), 1.0, Vec2::new(-15.0, -140.0)).unwrap();
    let mut s = RecordingSurface::new(Canvas::new(64, 64).unwrap());
    assert!(hand.draw(&mut s, Point::new(20.0, 150.0)));
    assert_eq!(
        s.ops(),
        &[DrawOp::Blit {
            x: 5,
            y: 10,
            width: 4,
            height: 4
        }]
    );
}

#[test]
fn missing_image_is_a_silent_no_op() {
    let hand = HandOverlay::load(
        Path::new("/definitely/not/here/hand.png"),
        DEFAULT_HAND_SCALE,
        DEFAULT_HAND_OFFSET,
    );
    assert!(!hand.is_loaded());
    let mut s = RecordingSurface::new(Canvas::new(8, 8).unwrap());
    assert!(!hand.draw(&mut s, Point::new(1.0, 1.0)));
    assert!(s.ops().is_empty());
}

#[test]
fn loads_png_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hand.png");
    image::save_buffer_with_format(
        &path,
        &solid(8, 8),
        8,
        8,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .unwrap();
    let hand = HandOverlay::load(&path, 0.5, DEFAULT_HAND_OFFSET);
    assert_eq!(hand.size(), Some((4, 4)));
}

#[test]
fn off_canvas_hand_draws_nothing() {
    let hand = HandOverlay::from_rgba8(4, 4, solid(4, 4), 1.0, Vec2::ZERO).unwrap();
    let mut s = RecordingSurface::new(Canvas::new(16, 16).unwrap());
    assert!(!hand.draw(&mut s, Point::new(16.0, 2.0)));
    assert!(!hand.draw(&mut s, Point::new(2.0, -4.0)));
    assert!(s.ops().is_empty());

    assert!(hand.draw(&mut s, Point::new(-3.0, -3.0)));
    assert_eq!(s.ops().len(), 1);
}

#[test]
fn huge_offset_is_skipped_without_touching_pixels() {
    let canvas = Canvas::new(16, 16).unwrap();
    let mut s = CpuSurface::new(canvas, Rgba8Premul::transparent()).unwrap();
    for offset in [Vec2::new(1e300, 0.0), Vec2::new(-1e300, -1e300)] {
        let hand = HandOverlay::from_rgba8(2, 2, solid(2, 2), 1.0, offset).unwrap();
        assert!(!hand.draw(&mut s, Point::new(10.0, 10.0)));
    }
    assert!(s.snapshot().data.iter().all(|&b| b == 0));
}
