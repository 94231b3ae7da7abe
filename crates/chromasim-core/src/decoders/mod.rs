//! Image decoders for various formats
//!
//! Support for PNG and TIFF sources, normalized to interleaved RGBA8.

mod png;
mod tiff;

#[cfg(test)]
mod tests;

use std::path::Path;

/// Decoded image data
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved RGBA data, 8 bits per channel
    pub data: Vec<u8>,
}

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "png" => png::decode_png(path),
        "tif" | "tiff" => tiff::decode_tiff(path),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}
