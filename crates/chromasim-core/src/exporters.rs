//! Image exporters
//!
//! Export simulated images to PNG.

use std::path::Path;

use crate::decoders::DecodedImage;

/// Export an RGBA8 image to PNG format
pub fn export_png<P: AsRef<Path>>(image: &DecodedImage, path: P) -> Result<(), String> {
    use std::fs::File;
    use std::io::BufWriter;

    let expected = (image.width as usize) * (image.height as usize) * 4;
    if image.data.len() != expected {
        return Err(format!(
            "Image data length {} does not match {}x{} RGBA",
            image.data.len(),
            image.width,
            image.height
        ));
    }

    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create PNG file: {}", e))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {}", e))?;
    writer
        .write_image_data(&image.data)
        .map_err(|e| format!("Failed to write PNG image data: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_rejects_mismatched_data() {
        let image = DecodedImage {
            width: 10,
            height: 10,
            data: vec![0; 10], // far too short
        };
        let dir = tempfile::tempdir().unwrap();
        let result = export_png(&image, dir.path().join("bad.png"));
        assert!(result.is_err());
    }
}
