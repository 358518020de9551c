use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PenlineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PenlineError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(PenlineError::render("x").to_string().contains("render error:"));
    assert!(PenlineError::encode("x").to_string().contains("encode error:"));
    assert!(PenlineError::svg("x").to_string().contains("svg error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PenlineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
