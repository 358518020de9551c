use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u8(100, 128), 50);
}

#[test]
fn over_respects_alpha_extremes() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
    assert_eq!(over(dst, [200, 100, 50, 255]), [200, 100, 50, 255]);
}

#[test]
fn over_half_alpha_mixes() {
    // 50% premultiplied white over opaque black.
    let out = over([0, 0, 0, 255], [128, 128, 128, 128]);
    assert_eq!(out, [128, 128, 128, 255]);
}

#[test]
fn unpremultiply_inverts_premultiply() {
    assert_eq!(unpremultiply([128, 0, 0, 128]), [255, 0, 0, 128]);
    assert_eq!(unpremultiply([0, 0, 0, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply_buffer(&[10, 20, 30, 255]), vec![10, 20, 30, 255]);
}
