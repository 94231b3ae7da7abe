//! Tests for the image decoders

use super::*;
use crate::exporters::export_png;

#[test]
fn test_unsupported_extension_is_rejected() {
    let err = decode_image("photo.bmp").unwrap_err();
    assert!(err.contains("Unsupported file format"), "{}", err);
}

#[test]
fn test_missing_extension_is_rejected() {
    assert!(decode_image("photo").is_err());
}

#[test]
fn test_png_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.png");

    let image = DecodedImage {
        width: 2,
        height: 2,
        data: vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 128, // translucent blue
            128, 64, 32, 200, // mid-range
        ],
    };

    export_png(&image, &path).unwrap();
    let decoded = decode_image(&path).unwrap();

    assert_eq!(decoded.width, 2);
    assert_eq!(decoded.height, 2);
    assert_eq!(decoded.data, image.data);
}
