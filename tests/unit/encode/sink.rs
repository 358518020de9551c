use super::*;

fn frame(w: u32, h: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: px.repeat((w * h) as usize),
        premultiplied: true,
    }
}

#[test]
fn write_all_drives_the_sink_in_order() {
    let frames = vec![frame(2, 2, [0; 4]), frame(2, 2, [255; 4])];
    let mut sink = InMemorySink::new();
    write_all(&mut sink, &frames, 12.0).unwrap();

    assert!(sink.is_finished());
    assert_eq!(
        sink.config(),
        Some(&SinkConfig {
            width: 2,
            height: 2,
            fps: 12.0
        })
    );
    let idx: Vec<usize> = sink.frames().iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, vec![0, 1]);
    assert_eq!(sink.frames()[1].1, frames[1]);
}

#[test]
fn write_all_rejects_empty_sequence() {
    let mut sink = InMemorySink::new();
    assert!(write_all(&mut sink, &[], 30.0).is_err());
    assert!(sink.config().is_none());
}

#[test]
fn check_frame_rejects_size_mismatch() {
    let cfg = SinkConfig {
        width: 4,
        height: 4,
        fps: 30.0,
    };
    assert!(check_frame(&cfg, &frame(4, 4, [0; 4])).is_ok());
    assert!(check_frame(&cfg, &frame(2, 4, [0; 4])).is_err());

    let mut short = frame(4, 4, [0; 4]);
    short.data.pop();
    assert!(check_frame(&cfg, &short).is_err());
}

#[test]
fn ensure_parent_dir_creates_nested_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a/b/out.png");
    ensure_parent_dir(&path).unwrap();
    assert!(dir.path().join("a/b").is_dir());
    ensure_parent_dir(std::path::Path::new("bare.png")).unwrap();
}
