//! Named 4x5 color matrix presets
//!
//! A color matrix is 20 coefficients laid out as 4 rows by 5 columns. Row r
//! produces output channel r (R, G, B, A in order); columns 0-3 weight the
//! input channels and column 4 is an additive bias. Applied per pixel:
//!
//! `out[r] = m[r*5]*R + m[r*5+1]*G + m[r*5+2]*B + m[r*5+3]*A + m[r*5+4]`

/// Coefficients of a 4x5 affine color transform, row-major.
pub type Coefficients = [f32; 20];

/// Identity transform. Output equals input exactly.
#[rustfmt::skip]
pub const IDENTITY: Coefficients = [
    1.0, 0.0, 0.0, 0.0, 0.0, // R
    0.0, 1.0, 0.0, 0.0, 0.0, // G
    0.0, 0.0, 1.0, 0.0, 0.0, // B
    0.0, 0.0, 0.0, 1.0, 0.0, // A
];

/// Grayscale using Rec. 709 luminance weights (human perception of color).
/// Every color channel becomes the same perceptual luminance; alpha untouched.
#[rustfmt::skip]
pub const GRAYSCALE: Coefficients = [
    0.2126, 0.7152, 0.0722, 0.0, 0.0, // R = 0.2126R + 0.7152G + 0.0722B
    0.2126, 0.7152, 0.0722, 0.0, 0.0, // G = 0.2126R + 0.7152G + 0.0722B
    0.2126, 0.7152, 0.0722, 0.0, 0.0, // B = 0.2126R + 0.7152G + 0.0722B
    0.0,    0.0,    0.0,    1.0, 0.0, // A = A
];

/// Protanopia simulation (red-cone deficiency).
///
/// The 3x3 linear block is the published empirical simulation model; the
/// values must stay bit-for-bit as-is since they encode a specific
/// physiological model.
#[rustfmt::skip]
pub const PROTANOPIA: Coefficients = [
    0.567, 0.433, 0.0,   0.0, 0.0,
    0.558, 0.442, 0.0,   0.0, 0.0,
    0.0,   0.242, 0.758, 0.0, 0.0,
    0.0,   0.0,   0.0,   1.0, 0.0,
];

/// Deuteranopia simulation (green-cone deficiency). Same sourcing as
/// [`PROTANOPIA`].
#[rustfmt::skip]
pub const DEUTERANOPIA: Coefficients = [
    0.625, 0.375, 0.0, 0.0, 0.0,
    0.7,   0.3,   0.0, 0.0, 0.0,
    0.0,   0.3,   0.7, 0.0, 0.0,
    0.0,   0.0,   0.0, 1.0, 0.0,
];

/// A named color matrix preset
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatrix {
    /// Display name (e.g. "Original", "Grayscale")
    pub name: String,

    /// The 4x5 transform, row-major
    pub coefficients: Coefficients,

    /// Human-readable description of the effect
    pub description: String,
}

impl ColorMatrix {
    fn new(name: &str, coefficients: Coefficients, description: &str) -> Self {
        Self {
            name: name.to_string(),
            coefficients,
            description: description.to_string(),
        }
    }

    /// The identity preset
    pub fn identity() -> Self {
        Self::new("Original", IDENTITY, "No transformation applied")
    }

    /// The grayscale preset
    pub fn grayscale() -> Self {
        Self::new(
            "Grayscale",
            GRAYSCALE,
            "Convert to grayscale using luminance weights",
        )
    }

    /// The protanopia simulation preset
    pub fn protanopia() -> Self {
        Self::new(
            "Protanopia",
            PROTANOPIA,
            "Simulates red-cone deficiency (red-green color blindness)",
        )
    }

    /// The deuteranopia simulation preset
    pub fn deuteranopia() -> Self {
        Self::new(
            "Deuteranopia",
            DEUTERANOPIA,
            "Simulates green-cone deficiency (red-green color blindness)",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_rows_are_identity() {
        for m in [IDENTITY, GRAYSCALE, PROTANOPIA, DEUTERANOPIA] {
            assert_eq!(&m[15..20], &[0.0, 0.0, 0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_bias_columns_are_zero() {
        for m in [IDENTITY, GRAYSCALE, PROTANOPIA, DEUTERANOPIA] {
            for row in 0..4 {
                assert_eq!(m[row * 5 + 4], 0.0);
            }
        }
    }

    #[test]
    fn test_grayscale_rows_use_luminance_weights() {
        for row in 0..3 {
            assert_eq!(&GRAYSCALE[row * 5..row * 5 + 3], &[0.2126, 0.7152, 0.0722]);
        }
    }

    #[test]
    fn test_deficiency_rows_sum_to_one() {
        // Each color row of the simulation blocks redistributes channel
        // energy without changing total weight
        for m in [PROTANOPIA, DEUTERANOPIA] {
            for row in 0..3 {
                let sum: f32 = m[row * 5..row * 5 + 3].iter().sum();
                assert!((sum - 1.0).abs() < 1e-6, "row {} sums to {}", row, sum);
            }
        }
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(ColorMatrix::identity().name, "Original");
        assert_eq!(ColorMatrix::grayscale().name, "Grayscale");
        assert_eq!(ColorMatrix::protanopia().name, "Protanopia");
        assert_eq!(ColorMatrix::deuteranopia().name, "Deuteranopia");
    }
}
