//! PNG image decoder

use std::path::Path;

use super::DecodedImage;

/// Decode a PNG file
pub(crate) fn decode_png<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open PNG file: {}", e))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    // Expand palette and sub-byte grayscale to plain 8-bit samples
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("Failed to read PNG info: {}", e))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("Failed to read PNG frame: {}", e))?;

    let bytes = &buf[..frame_info.buffer_size()];
    let width = frame_info.width;
    let height = frame_info.height;

    let data = match (frame_info.color_type, frame_info.bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => expand_gray8(bytes),
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => expand_gray16(bytes),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => expand_gray_alpha8(bytes),
        (png::ColorType::Rgb, png::BitDepth::Eight) => expand_rgb8(bytes),
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => expand_rgb16(bytes),
        (png::ColorType::Rgba, png::BitDepth::Eight) => bytes.to_vec(),
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => squeeze_rgba16(bytes),
        (color_type, bit_depth) => {
            return Err(format!(
                "Unsupported PNG format: {:?} with bit depth {:?}",
                color_type, bit_depth
            ));
        }
    };

    Ok(DecodedImage {
        width,
        height,
        data,
    })
}

fn expand_gray8(bytes: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(bytes.len() * 4);
    for &v in bytes {
        data.extend_from_slice(&[v, v, v, 255]);
    }
    data
}

fn expand_gray16(bytes: &[u8]) -> Vec<u8> {
    // 16-bit samples are big-endian; keep the high byte
    let mut data = Vec::with_capacity(bytes.len() * 2);
    for pair in bytes.chunks_exact(2) {
        let v = pair[0];
        data.extend_from_slice(&[v, v, v, 255]);
    }
    data
}

fn expand_gray_alpha8(bytes: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(bytes.len() * 2);
    for pixel in bytes.chunks_exact(2) {
        let (v, a) = (pixel[0], pixel[1]);
        data.extend_from_slice(&[v, v, v, a]);
    }
    data
}

fn expand_rgb8(bytes: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(bytes.len() / 3 * 4);
    for pixel in bytes.chunks_exact(3) {
        data.extend_from_slice(&[pixel[0], pixel[1], pixel[2], 255]);
    }
    data
}

fn expand_rgb16(bytes: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(bytes.len() / 6 * 4);
    for pixel in bytes.chunks_exact(6) {
        data.extend_from_slice(&[pixel[0], pixel[2], pixel[4], 255]);
    }
    data
}

fn squeeze_rgba16(bytes: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(bytes.len() / 2);
    for pixel in bytes.chunks_exact(8) {
        data.extend_from_slice(&[pixel[0], pixel[2], pixel[4], pixel[6]]);
    }
    data
}
