use super::*;

fn half_red(w: u32, h: u32) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: [128u8, 0, 0, 128].repeat((w * h) as usize),
        premultiplied: true,
    }
}

#[test]
fn write_png_stores_straight_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    write_png(&half_red(3, 2), &path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    let px = img.get_pixel(1, 1).0;
    assert_eq!(px[3], 128);
    assert!(px[0] >= 254);
    assert_eq!(px[1], 0);
}

#[test]
fn sequence_sink_names_frames_by_index() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("seq");
    let mut sink = PngSequenceSink::new(&out, "frame");
    sink.begin(SinkConfig {
        width: 2,
        height: 2,
        fps: 30.0,
    })
    .unwrap();
    for i in 0..3 {
        sink.push_frame(i, &half_red(2, 2)).unwrap();
    }
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 3);
    assert_eq!(sink.written()[2], out.join("frame_00002.png"));
    assert!(out.join("frame_00000.png").is_file());
}

#[test]
fn sequence_sink_requires_begin() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = PngSequenceSink::new(dir.path(), "f");
    assert!(sink.push_frame(0, &half_red(2, 2)).is_err());
}
