use super::*;

#[test]
fn hex_forms_parse() {
    assert_eq!(parse_hex("#ff0000").unwrap(), Rgba::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(parse_hex("0f0").unwrap(), Rgba::new(0.0, 1.0, 0.0, 1.0));
    assert_eq!(parse_hex("#00000000").unwrap(), Rgba::TRANSPARENT);
    assert!(parse_hex("#12345").is_err());
    assert!(parse_hex("#gg0000").is_err());
}

#[test]
fn deserializes_every_representation() {
    let c: Rgba = serde_json::from_str("\"#000000\"").unwrap();
    assert_eq!(c, Rgba::BLACK);
    let c: Rgba = serde_json::from_str(r#"{"r":1,"g":0.5,"b":0}"#).unwrap();
    assert_eq!(c, Rgba::new(1.0, 0.5, 0.0, 1.0));
    let c: Rgba = serde_json::from_str("[0, 0, 1, 0.5]").unwrap();
    assert_eq!(c, Rgba::new(0.0, 0.0, 1.0, 0.5));
    let c: Rgba = serde_json::from_str(r#"{"h":0,"s":1,"l":0.5}"#).unwrap();
    assert!((c.r - 1.0).abs() < 1e-9 && c.g.abs() < 1e-9 && c.b.abs() < 1e-9);
    assert!(serde_json::from_str::<Rgba>("[1, 2]").is_err());
}

#[test]
fn conversions_clamp_and_premultiply() {
    assert_eq!(Rgba::new(2.0, -1.0, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    let p = Rgba::new(1.0, 1.0, 1.0, 0.5).to_premul();
    assert_eq!(p.to_array(), [128, 128, 128, 128]);
    assert!(Rgba::TRANSPARENT.is_transparent());
    assert!(!Rgba::BLACK.is_transparent());
}

#[test]
fn from_str_uses_hex_syntax() {
    assert_eq!("#000".parse::<Rgba>().unwrap(), Rgba::BLACK);
    let err = "red".parse::<Rgba>().unwrap_err();
    assert!(err.to_string().starts_with("validation error"));
}
