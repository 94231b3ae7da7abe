//! Matrix application and display geometry
//!
//! Applies a 4x5 color matrix to interleaved RGBA8 pixel data and provides
//! the scale-to-fit geometry and preview downsampling used by display
//! surfaces.

use rayon::prelude::*;

use crate::decoders::DecodedImage;
use crate::matrices::Coefficients;

/// Apply a 4x5 color matrix to interleaved RGBA8 data in place.
///
/// Channels are normalized to 0..1, transformed, clamped, and requantized
/// with round-half-up (`(v * 255).round()`).
///
/// Uses parallel processing for large images (>100k pixels)
pub fn apply_color_matrix(data: &mut [u8], matrix: &Coefficients) {
    let num_pixels = data.len() / 4;
    const PARALLEL_THRESHOLD: usize = 100_000;

    if num_pixels >= PARALLEL_THRESHOLD {
        // Process in chunks of 256 pixels (1024 bytes) for cache locality
        const CHUNK_SIZE: usize = 256 * 4;
        data.par_chunks_mut(CHUNK_SIZE).for_each(|chunk| {
            for pixel in chunk.chunks_exact_mut(4) {
                apply_matrix_to_pixel(pixel, matrix);
            }
        });
    } else {
        for pixel in data.chunks_exact_mut(4) {
            apply_matrix_to_pixel(pixel, matrix);
        }
    }
}

/// Apply the matrix to a single RGBA pixel
#[inline(always)]
fn apply_matrix_to_pixel(pixel: &mut [u8], m: &Coefficients) {
    let r = pixel[0] as f32 / 255.0;
    let g = pixel[1] as f32 / 255.0;
    let b = pixel[2] as f32 / 255.0;
    let a = pixel[3] as f32 / 255.0;

    for row in 0..4 {
        let i = row * 5;
        let value = m[i] * r + m[i + 1] * g + m[i + 2] * b + m[i + 3] * a + m[i + 4];
        pixel[row] = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
}

/// Placement of an image within a target area: scaled to fit while
/// preserving aspect ratio, centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Compute the scaled, centered placement of a `src_width` x `src_height`
/// image within a `dst_width` x `dst_height` area.
pub fn fit_rect(src_width: u32, src_height: u32, dst_width: f32, dst_height: f32) -> FitRect {
    let scale = (dst_width / src_width as f32).min(dst_height / src_height as f32);
    let width = src_width as f32 * scale;
    let height = src_height as f32 * scale;

    FitRect {
        x: (dst_width - width) / 2.0,
        y: (dst_height - height) / 2.0,
        width,
        height,
    }
}

/// Downsample an image so its largest dimension is at most `max_dim`,
/// using nearest-neighbor sampling. Returns a clone when the image already
/// fits. Used for fast interactive previews.
pub fn downsample(image: &DecodedImage, max_dim: u32) -> DecodedImage {
    let largest = image.width.max(image.height);
    if largest <= max_dim {
        return image.clone();
    }

    let scale = max_dim as f32 / largest as f32;
    let new_width = ((image.width as f32 * scale) as u32).max(1);
    let new_height = ((image.height as f32 * scale) as u32).max(1);

    let mut data = Vec::with_capacity((new_width * new_height * 4) as usize);
    for y in 0..new_height {
        let src_y = (y as f32 / scale) as u32;
        let src_y = src_y.min(image.height - 1);
        for x in 0..new_width {
            let src_x = (x as f32 / scale) as u32;
            let src_x = src_x.min(image.width - 1);
            let idx = ((src_y * image.width + src_x) * 4) as usize;
            data.extend_from_slice(&image.data[idx..idx + 4]);
        }
    }

    DecodedImage {
        width: new_width,
        height: new_height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::{GRAYSCALE, IDENTITY};

    #[test]
    fn test_identity_leaves_pixels_unchanged() {
        let mut data = vec![
            0, 0, 0, 0, // transparent black
            255, 255, 255, 255, // opaque white
            128, 64, 32, 200, // mid-range
        ];
        let expected = data.clone();
        apply_color_matrix(&mut data, &IDENTITY);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_grayscale_on_pure_red() {
        // 0.2126 * 255 = 54.213, rounds to 54 on every color channel
        let mut data = vec![255, 0, 0, 255];
        apply_color_matrix(&mut data, &GRAYSCALE);
        assert_eq!(data, vec![54, 54, 54, 255]);
    }

    #[test]
    fn test_bias_column_is_additive() {
        let mut m = IDENTITY;
        m[4] = 0.5; // +0.5 on the red output
        let mut data = vec![0, 10, 20, 255];
        apply_color_matrix(&mut data, &m);
        assert_eq!(data[0], 128); // 0.5 * 255 = 127.5, rounds up
        assert_eq!(&data[1..], &[10, 20, 255]);
    }

    #[test]
    fn test_output_saturates() {
        let mut m = IDENTITY;
        m[0] = 2.0; // red doubled
        m[6] = -1.0; // green negated
        let mut data = vec![200, 200, 0, 255];
        apply_color_matrix(&mut data, &m);
        assert_eq!(data[0], 255);
        assert_eq!(data[1], 0);
    }

    #[test]
    fn test_fit_rect_landscape_into_square() {
        let rect = fit_rect(200, 100, 150.0, 150.0);
        assert_eq!(rect.width, 150.0);
        assert_eq!(rect.height, 75.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 37.5);
    }

    #[test]
    fn test_fit_rect_portrait_into_square() {
        let rect = fit_rect(100, 200, 150.0, 150.0);
        assert_eq!(rect.width, 75.0);
        assert_eq!(rect.height, 150.0);
        assert_eq!(rect.x, 37.5);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn test_downsample_dimensions() {
        let image = DecodedImage {
            width: 400,
            height: 200,
            data: vec![0; 400 * 200 * 4],
        };
        let small = downsample(&image, 100);
        assert_eq!(small.width, 100);
        assert_eq!(small.height, 50);
        assert_eq!(small.data.len(), 100 * 50 * 4);
    }

    #[test]
    fn test_downsample_noop_when_small_enough() {
        let image = DecodedImage {
            width: 64,
            height: 64,
            data: vec![7; 64 * 64 * 4],
        };
        let same = downsample(&image, 1024);
        assert_eq!(same.width, 64);
        assert_eq!(same.data, image.data);
    }
}
