use super::*;

fn sample() -> CartFile {
    CartFile {
        year: 1999,
        genre: 9,
        screenshot: 75,
        ngh: 0x0251,
        name: "Some Fighting Game".to_string(),
        manufacturer: "SNK".to_string(),
        areas: [
            vec![0x11; 0x200],
            vec![0x22; 0x80],
            vec![0x33; 0x40],
            vec![0x44; 0x100],
            Vec::new(),
            vec![0x55; 0x400],
        ],
    }
}

#[test]
fn test_round_trip() {
    let cart = sample();
    let bytes = cart.to_bytes();
    let back = CartFile::parse(&bytes).unwrap();

    assert_eq!(back.year, cart.year);
    assert_eq!(back.genre, cart.genre);
    assert_eq!(back.screenshot, cart.screenshot);
    assert_eq!(back.ngh, cart.ngh);
    assert_eq!(back.name, cart.name);
    assert_eq!(back.manufacturer, cart.manufacturer);
    assert_eq!(back.areas, cart.areas);

    // Byte-level round trip the other way too.
    assert_eq!(back.to_bytes(), bytes);
}

#[test]
fn test_total_length() {
    let bytes = sample().to_bytes();
    assert_eq!(bytes.len(), HEADER_LEN + 0x200 + 0x80 + 0x40 + 0x100 + 0x400);
}

#[test]
fn test_header_sizes_match_bodies() {
    let cart = sample();
    let bytes = cart.to_bytes();
    for (i, area) in cart.areas.iter().enumerate() {
        let off = 4 + i * 4;
        let size = u32::from_le_bytes([
            bytes[off],
            bytes[off + 1],
            bytes[off + 2],
            bytes[off + 3],
        ]);
        assert_eq!(size as usize, area.len());
    }
}

#[test]
fn test_signature_and_version() {
    let bytes = sample().to_bytes();
    assert_eq!(&bytes[..4], b"NEO\x01");
}

#[test]
fn test_name_field_zero_padded() {
    let bytes = sample().to_bytes();
    let field = &bytes[44..44 + NAME_LEN];
    assert_eq!(&field[..18], b"Some Fighting Game");
    assert!(field[18..].iter().all(|&b| b == 0));
    // Reserved tail stays erased.
    assert!(bytes[94..HEADER_LEN].iter().all(|&b| b == 0));
}

#[test]
fn test_long_name_truncated() {
    let mut cart = sample();
    cart.name = "x".repeat(80);
    cart.manufacturer = "y".repeat(40);
    let bytes = cart.to_bytes();
    let back = CartFile::parse(&bytes).unwrap();
    assert_eq!(back.name.len(), NAME_LEN);
    assert_eq!(back.manufacturer.len(), MANUFACTURER_LEN);
}

#[test]
fn test_bad_signature_rejected() {
    let mut bytes = sample().to_bytes();
    bytes[0] = b'X';
    assert!(matches!(
        CartFile::parse(&bytes),
        Err(FormatError::Invalid(_))
    ));
}

#[test]
fn test_bad_version_rejected() {
    let mut bytes = sample().to_bytes();
    bytes[3] = 2;
    assert!(matches!(
        CartFile::parse(&bytes),
        Err(FormatError::Invalid(_))
    ));
}

#[test]
fn test_trailing_byte_rejected() {
    let mut bytes = sample().to_bytes();
    bytes.push(0);
    assert!(matches!(CartFile::parse(&bytes), Err(FormatError::TooMuch)));
}

#[test]
fn test_truncated_body_rejected() {
    let mut bytes = sample().to_bytes();
    bytes.pop();
    assert!(matches!(
        CartFile::parse(&bytes),
        Err(FormatError::Invalid(_))
    ));
}

#[test]
fn test_truncated_header_rejected() {
    assert!(matches!(
        CartFile::parse(&[0u8; 100]),
        Err(FormatError::Invalid(_))
    ));
}

#[test]
fn test_empty_areas_round_trip() {
    let cart = CartFile::default();
    let bytes = CartFile {
        name: "empty".into(),
        ..cart
    }
    .to_bytes();
    assert_eq!(bytes.len(), HEADER_LEN);
    let back = CartFile::parse(&bytes).unwrap();
    assert!(back.areas.iter().all(Vec::is_empty));
}
