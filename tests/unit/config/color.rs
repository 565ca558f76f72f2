use super::*;

#[test]
fn parses_long_and_short_hex() {
    assert_eq!(parse_hex("#ff8000").unwrap(), Rgb8::new(255, 128, 0));
    assert_eq!(parse_hex("FF8000").unwrap(), Rgb8::new(255, 128, 0));
    assert_eq!(parse_hex("  #0aF ").unwrap(), Rgb8::new(0, 170, 255));
}

#[test]
fn rejects_bad_hex() {
    assert!(parse_hex("#ff80").is_err());
    assert!(parse_hex("#gg0000").is_err());
    assert!(parse_hex("").is_err());
    assert!(parse_hex("#ffé00").is_err());
}

#[test]
fn deserializes_every_form() {
    let colors: Vec<Rgb8> =
        serde_json::from_str(r##"["#010203", [4, 5, 6], {"r": 7, "g": 8, "b": 9}]"##).unwrap();
    assert_eq!(
        colors,
        vec![Rgb8::new(1, 2, 3), Rgb8::new(4, 5, 6), Rgb8::new(7, 8, 9)]
    );
}

#[test]
fn rejects_wrong_array_length() {
    assert!(serde_json::from_str::<Rgb8>("[1, 2]").is_err());
    assert!(serde_json::from_str::<Rgb8>("[1, 2, 3, 4]").is_err());
    assert!(serde_json::from_str::<Rgb8>("[1, 2, 300]").is_err());
}

#[test]
fn serializes_as_hex() {
    let s = serde_json::to_string(&Rgb8::new(171, 205, 239)).unwrap();
    assert_eq!(s, "\"#abcdef\"");
}
