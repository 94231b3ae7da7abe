//! Matrix interpolation and combination
//!
//! The two pure operations that turn fixed presets into adjustable,
//! layerable effects: a per-element lerp expressing "how strongly is this
//! deficiency simulated", and an additive saturating merge layering several
//! active deficiencies into one matrix.

use crate::matrices::Coefficients;

/// Linearly interpolate between two matrices.
///
/// `result[i] = (1 - t) * base[i] + t * target[i]` for all 20 coefficients.
/// At `t = 0` the result equals `base` exactly, at `t = 1` it equals
/// `target` exactly. `t` is deliberately not clamped here; the [0, 1] bound
/// is the caller's policy (sliders and CLI parsing enforce it).
#[inline]
pub fn interpolate(base: &Coefficients, target: &Coefficients, t: f32) -> Coefficients {
    let mut result = [0.0f32; 20];
    for i in 0..20 {
        result[i] = (1.0 - t) * base[i] + t * target[i];
    }
    result
}

/// Combine two matrices by element-wise sum, clamped into [0, 1].
///
/// This is a deliberately simple approximation for layering two
/// independently-interpolated deficiency effects; it is not matrix
/// multiplication and does not model compounding deficiencies physically.
/// The rule is preserved exactly for behavioral compatibility, including
/// that out-of-range inputs saturate rather than wrap.
#[inline]
pub fn combine(a: &Coefficients, b: &Coefficients) -> Coefficients {
    let mut result = [0.0f32; 20];
    for i in 0..20 {
        result[i] = (a[i] + b[i]).clamp(0.0, 1.0);
    }
    result
}

/// Validate an untyped coefficient vector (e.g. loaded from a config file)
/// into a fixed-size matrix. Anything other than exactly 20 values is a
/// hard error; internal callers always carry `[f32; 20]` and never hit this.
pub fn coefficients_from_slice(values: &[f32]) -> Result<Coefficients, String> {
    let array: Coefficients = values
        .try_into()
        .map_err(|_| format!("Color matrix must have 20 coefficients, got {}", values.len()))?;
    Ok(array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::{DEUTERANOPIA, GRAYSCALE, IDENTITY, PROTANOPIA};

    #[test]
    fn test_interpolate_endpoints_are_exact() {
        let result = interpolate(&IDENTITY, &PROTANOPIA, 0.0);
        assert_eq!(result, IDENTITY);

        let result = interpolate(&IDENTITY, &PROTANOPIA, 1.0);
        assert_eq!(result, PROTANOPIA);
    }

    #[test]
    fn test_interpolate_toward_self_is_noop() {
        // Bit-exact where both products are exact in f32
        for t in [0.0, 0.5, 1.0] {
            let result = interpolate(&GRAYSCALE, &GRAYSCALE, t);
            assert_eq!(result, GRAYSCALE, "t = {}", t);
        }
        // Within rounding everywhere else
        for t in [0.25, 0.33, 0.75, 0.99] {
            let result = interpolate(&GRAYSCALE, &GRAYSCALE, t);
            for i in 0..20 {
                assert!((result[i] - GRAYSCALE[i]).abs() < 1e-6, "t = {}, i = {}", t, i);
            }
        }
    }

    #[test]
    fn test_interpolate_midpoint() {
        let result = interpolate(&IDENTITY, &DEUTERANOPIA, 0.5);
        for i in 0..20 {
            let expected = 0.5 * IDENTITY[i] + 0.5 * DEUTERANOPIA[i];
            assert!((result[i] - expected).abs() < 1e-6, "index {}", i);
        }
    }

    #[test]
    fn test_combine_is_clamped_elementwise_sum() {
        let a = interpolate(&IDENTITY, &PROTANOPIA, 0.3);
        let b = interpolate(&IDENTITY, &DEUTERANOPIA, 0.7);
        let result = combine(&a, &b);
        for i in 0..20 {
            assert_eq!(result[i], (a[i] + b[i]).clamp(0.0, 1.0), "index {}", i);
        }
    }

    #[test]
    fn test_combine_saturates_out_of_range_inputs() {
        let mut a = IDENTITY;
        let mut b = IDENTITY;
        a[0] = 1.5;
        b[1] = -2.0;
        let result = combine(&a, &b);
        assert_eq!(result[0], 1.0); // 1.5 + 1.0 saturates high
        assert_eq!(result[1], 0.0); // 0.0 + -2.0 saturates low
    }

    #[test]
    fn test_coefficients_from_slice_rejects_wrong_length() {
        assert!(coefficients_from_slice(&[0.0; 19]).is_err());
        assert!(coefficients_from_slice(&[0.0; 21]).is_err());
        assert!(coefficients_from_slice(&[]).is_err());

        let ok = coefficients_from_slice(&IDENTITY).unwrap();
        assert_eq!(ok, IDENTITY);
    }
}
