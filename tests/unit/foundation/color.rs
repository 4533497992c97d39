use super::*;
use serde_json::json;

#[test]
fn displays_opaque_and_translucent_hex() {
    let ember = Rgba8::rgb_hex(0xF97316);
    assert_eq!(ember.to_string(), "#F97316");
    assert_eq!(ember.with_alpha(0x15).to_string(), "#F9731615");
    assert_eq!(Rgba8::transparent().to_string(), "#00000000");
}

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba8::rgb_hex(0xFF0000));

    let c: Rgba8 = serde_json::from_value(json!("0A0A0B80")).unwrap();
    assert_eq!(c, Rgba8::rgb_hex(0x0A0A0B).with_alpha(0x80));
}

#[test]
fn parses_arrays() {
    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(
        c,
        Rgba8 {
            r: 1,
            g: 2,
            b: 3,
            a: 255
        }
    );
    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgba8::parse_hex("#12345").is_err());
    assert!(Rgba8::parse_hex("#GG0000").is_err());
}

#[test]
fn serializes_as_hex_string() {
    let v = serde_json::to_value(Rgba8::rgb_hex(0x22C55E).with_alpha(0x08)).unwrap();
    assert_eq!(v, json!("#22C55E08"));
}
