//! TIFF image decoder

use std::path::Path;

use super::DecodedImage;

/// Decode a TIFF file
pub(crate) fn decode_tiff<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open TIFF file: {}", e))?;

    let mut decoder = tiff::decoder::Decoder::new(BufReader::new(file))
        .map_err(|e| format!("Failed to create TIFF decoder: {}", e))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| format!("Failed to get TIFF dimensions: {}", e))?;

    let color_type = decoder
        .colortype()
        .map_err(|e| format!("Failed to get TIFF color type: {}", e))?;

    let channels = match color_type {
        tiff::ColorType::Gray(_) => 1,
        tiff::ColorType::GrayA(_) => 2,
        tiff::ColorType::RGB(_) => 3,
        tiff::ColorType::RGBA(_) => 4,
        other => return Err(format!("Unsupported TIFF color type: {:?}", other)),
    };

    let image_data = decoder
        .read_image()
        .map_err(|e| format!("Failed to read TIFF image data: {}", e))?;

    let data = match image_data {
        tiff::decoder::DecodingResult::U8(buf) => to_rgba8(&buf, channels),
        tiff::decoder::DecodingResult::U16(buf) => {
            let u8_buf: Vec<u8> = buf.iter().map(|&v| (v >> 8) as u8).collect();
            to_rgba8(&u8_buf, channels)
        }
        _ => return Err("Unsupported TIFF sample format".to_string()),
    };

    Ok(DecodedImage {
        width,
        height,
        data,
    })
}

/// Expand interleaved samples with `channels` components per pixel to RGBA8
fn to_rgba8(samples: &[u8], channels: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() / channels * 4);
    for pixel in samples.chunks_exact(channels) {
        match channels {
            1 => data.extend_from_slice(&[pixel[0], pixel[0], pixel[0], 255]),
            2 => data.extend_from_slice(&[pixel[0], pixel[0], pixel[0], pixel[1]]),
            3 => data.extend_from_slice(&[pixel[0], pixel[1], pixel[2], 255]),
            _ => data.extend_from_slice(&[pixel[0], pixel[1], pixel[2], pixel[3]]),
        }
    }
    data
}
