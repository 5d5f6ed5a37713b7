use gpui_progress::theme::{hex_color, ios7_blue, ios7_gray, ProgressTheme};

#[test]
fn test_parse_hex_six_digits() {
    let parsed = hex_color::parse_hex_str("#007aff").unwrap();
    assert_eq!(parsed, ios7_blue());
}

#[test]
fn test_parse_hex_without_hash() {
    let parsed = hex_color::parse_hex_str("65b6b7").unwrap();
    assert_eq!(parsed, ios7_gray());
}

#[test]
fn test_parse_hex_eight_digits_carries_alpha() {
    let parsed = hex_color::parse_hex_str("#ffffff00").unwrap();
    assert_eq!(parsed.a, 0.0);

    let parsed = hex_color::parse_hex_str("#000000ff").unwrap();
    assert_eq!(parsed.a, 1.0);
}

#[test]
fn test_parse_hex_rejects_garbage() {
    assert!(hex_color::parse_hex_str("not a color").is_err());
    assert!(hex_color::parse_hex_str("#12345").is_err());
    assert!(hex_color::parse_hex_str("#1234567").is_err());
    assert!(hex_color::parse_hex_str("").is_err());
}

#[test]
fn test_hex_round_trip() {
    for hex in ["#007aff", "#65b6b7", "#ffffff", "#000000", "#c0ffee"] {
        let color = hex_color::parse_hex_str(hex).unwrap();
        assert_eq!(hex_color::to_hex_str(&color), *hex);
    }
}

#[test]
fn test_translucent_color_serializes_with_alpha() {
    let color = hex_color::parse_hex_str("#007aff80").unwrap();
    assert_eq!(hex_color::to_hex_str(&color), "#007aff80");
}

#[test]
fn test_theme_default_palette() {
    let theme = ProgressTheme::default();
    assert_eq!(theme.tint_color, ios7_blue());
    assert_eq!(theme.tick_color, gpui::white());
    assert_eq!(theme.background_color.a, 0.0);
}

#[test]
fn test_theme_json_round_trip() {
    let theme = ProgressTheme {
        tint_color: ios7_gray(),
        background_color: gpui::black(),
        tick_color: gpui::white(),
    };

    let json = serde_json::to_string(&theme).unwrap();
    assert!(json.contains("#65b6b7"));

    let back: ProgressTheme = serde_json::from_str(&json).unwrap();
    assert_eq!(
        hex_color::to_hex_str(&back.tint_color),
        hex_color::to_hex_str(&theme.tint_color)
    );
    assert_eq!(
        hex_color::to_hex_str(&back.background_color),
        hex_color::to_hex_str(&theme.background_color)
    );
}

#[test]
fn test_theme_json_rejects_bad_color() {
    let json = r##"{"tint_color":"#zzzzzz","background_color":"#000000","tick_color":"#ffffff"}"##;
    let result: Result<ProgressTheme, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_theme_json_shape() {
    let json = r##"{"tint_color":"#007aff","background_color":"#00000000","tick_color":"#ffffff"}"##;
    let theme: ProgressTheme = serde_json::from_str(json).unwrap();
    assert_eq!(theme.tint_color, ios7_blue());
    assert_eq!(theme.background_color.a, 0.0);
}
