use super::*;
use crate::foundation::core::Canvas;

fn surface(bg: Rgba8Premul) -> CpuSurface {
    CpuSurface::new(Canvas::new(32, 32).unwrap(), bg).unwrap()
}

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((x0, y0));
    p.line_to((x1, y0));
    p.line_to((x1, y1));
    p.line_to((x0, y1));
    p.close_path();
    p
}

#[test]
fn new_surface_is_filled_with_background() {
    let bg = Rgba8Premul::from_straight_rgba(0, 0, 255, 255);
    let frame = surface(bg).snapshot();
    assert_eq!(frame.data.len(), 32 * 32 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.chunks_exact(4).all(|px| px == [0, 0, 255, 255]));
}

#[test]
fn fills_cover_interior_pixels() {
    let mut s = surface(Rgba8Premul::transparent());
    s.fill_contours(&square(4.0, 4.0, 20.0, 20.0), Rgba::new(1.0, 0.0, 0.0, 1.0));
    let frame = s.snapshot();
    assert_eq!(frame.pixel(10, 10), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(28, 28), Some([0, 0, 0, 0]));
}

#[test]
fn strokes_touch_pixels_along_the_segment() {
    let mut s = surface(Rgba8Premul::transparent());
    s.stroke_line(
        Point::new(2.0, 16.0),
        Point::new(30.0, 16.0),
        Rgba::BLACK,
        4.0,
    );
    let frame = s.snapshot();
    assert_eq!(frame.pixel(16, 16).map(|p| p[3]), Some(255));
    assert_eq!(frame.pixel(16, 2).map(|p| p[3]), Some(0));
}

#[test]
fn degenerate_and_transparent_strokes_draw_nothing() {
    let mut s = surface(Rgba8Premul::transparent());
    let p = Point::new(5.0, 5.0);
    s.stroke_line(p, p, Rgba::BLACK, 3.0);
    s.stroke_cubic(p, p, p, p, Rgba::BLACK, 3.0);
    s.stroke_line(p, Point::new(20.0, 20.0), Rgba::TRANSPARENT, 3.0);
    assert!(s.snapshot().data.iter().all(|&b| b == 0));
}

#[test]
fn clear_discards_drawing() {
    let mut s = surface(Rgba8Premul::transparent());
    s.fill_contours(&square(0.0, 0.0, 32.0, 32.0), Rgba::BLACK);
    s.clear();
    assert!(s.snapshot().data.iter().all(|&b| b == 0));
}

#[test]
fn blit_is_clipped_to_the_surface() {
    let mut dst = vec![0u8; 4 * 4 * 4];
    let src = vec![255u8; 2 * 2 * 4];
    blit_clipped(&mut dst, 4, 4, &src, 2, 2, 3, -1);
    let lit: Vec<usize> = dst
        .chunks_exact(4)
        .enumerate()
        .filter(|(_, px)| px[3] == 255)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(lit, vec![3]);

    let before = dst.clone();
    blit_clipped(&mut dst, 4, 4, &src, 2, 2, 10, 10);
    blit_clipped(&mut dst, 4, 4, &src, 2, 2, -5, 0);
    blit_clipped(&mut dst, 4, 4, &src, 2, 2, i64::MAX, i64::MAX);
    blit_clipped(&mut dst, 4, 4, &src, 2, 2, i64::MIN, 0);
    assert_eq!(dst, before);
}

#[test]
fn blit_composites_after_pending_draws() {
    let mut s = surface(Rgba8Premul::transparent());
    s.fill_contours(&square(0.0, 0.0, 32.0, 32.0), Rgba::new(1.0, 0.0, 0.0, 1.0));
    s.blit_premul(0, 0, 1, 1, &[0, 255, 0, 255]);
    let frame = s.snapshot();
    assert_eq!(frame.pixel(0, 0), Some([0, 255, 0, 255]));
    assert_eq!(frame.pixel(1, 1), Some([255, 0, 0, 255]));
}
