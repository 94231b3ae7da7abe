//! Argument validation and effective-matrix construction from CLI flags

use chromasim_core::matrices::ColorMatrix;
use chromasim_core::vision::{EffectiveMatrix, VisionState};

/// Validate an intensity flag value against the [0, 1] slider bound.
///
/// The engine itself does not clamp intensities, so the bound is enforced
/// here, at the outermost surface.
pub fn parse_intensity(value: f32, flag: &str) -> Result<f32, String> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(format!(
            "--{} must be between 0.0 and 1.0, got {}",
            flag, value
        ));
    }
    Ok(value)
}

/// Build the effective matrix from the simulation flags.
///
/// `--grayscale` selects the grayscale preset directly; otherwise each
/// deficiency flag that was given enables that profile at the given
/// intensity and the matrix is derived from the resulting Vision State.
pub fn build_effective_matrix(
    protan: Option<f32>,
    deutan: Option<f32>,
    grayscale: bool,
) -> Result<EffectiveMatrix, String> {
    if grayscale {
        let preset = ColorMatrix::grayscale();
        return Ok(EffectiveMatrix {
            coefficients: preset.coefficients,
            label: preset.name,
        });
    }

    let mut state = VisionState::default();
    if let Some(intensity) = protan {
        state.protan.enabled = true;
        state.protan.intensity = parse_intensity(intensity, "protan")?;
    }
    if let Some(intensity) = deutan {
        state.deutan.enabled = true;
        state.deutan.intensity = parse_intensity(intensity, "deutan")?;
    }

    Ok(state.effective())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromasim_core::matrices::{GRAYSCALE, IDENTITY};

    #[test]
    fn test_parse_intensity_bounds() {
        assert_eq!(parse_intensity(0.0, "protan").unwrap(), 0.0);
        assert_eq!(parse_intensity(1.0, "protan").unwrap(), 1.0);
        assert!(parse_intensity(-0.1, "protan").is_err());
        assert!(parse_intensity(1.1, "protan").is_err());
        assert!(parse_intensity(f32::NAN, "protan").is_err());
    }

    #[test]
    fn test_no_flags_yields_identity() {
        let effective = build_effective_matrix(None, None, false).unwrap();
        assert_eq!(effective.coefficients, IDENTITY);
        assert_eq!(effective.label, "Original");
    }

    #[test]
    fn test_grayscale_flag_selects_preset() {
        let effective = build_effective_matrix(None, None, true).unwrap();
        assert_eq!(effective.coefficients, GRAYSCALE);
        assert_eq!(effective.label, "Grayscale");
    }

    #[test]
    fn test_deficiency_flags_enable_profiles() {
        let effective = build_effective_matrix(Some(0.5), Some(0.5), false).unwrap();
        assert_eq!(effective.label, "Red-Green (P:50%, D:50%)");
    }

    #[test]
    fn test_out_of_range_flag_is_rejected() {
        assert!(build_effective_matrix(Some(2.0), None, false).is_err());
    }
}
