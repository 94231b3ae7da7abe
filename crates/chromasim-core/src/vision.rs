//! Vision state and effective-matrix derivation
//!
//! Tracks which deficiencies are enabled and at what intensity, and derives
//! the single matrix actually applied to the displayed image. The state is a
//! plain value: UI sessions own one copy each and replace it wholesale on
//! every change, keeping the engine pure.

use serde::{Deserialize, Serialize};

use crate::blend::{combine, interpolate};
use crate::matrices::{self, Coefficients};

/// The simulated color vision deficiencies.
///
/// Declaration order is the fold order of the effective-matrix derivation:
/// protan is always folded before deutan. The combine rule clamps, so the
/// order affects the result in edge cases and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    /// Protanopia (red-cone deficiency)
    Protan,

    /// Deuteranopia (green-cone deficiency)
    Deutan,
}

impl Deficiency {
    /// All deficiencies, in derivation fold order.
    pub const ALL: [Deficiency; 2] = [Deficiency::Protan, Deficiency::Deutan];

    /// Full display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protan => "Protanopia",
            Self::Deutan => "Deuteranopia",
        }
    }

    /// Short code used in derived display labels (e.g. "P:50%")
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::Protan => "P",
            Self::Deutan => "D",
        }
    }

    /// The fixed simulation matrix this deficiency interpolates toward
    pub fn base_matrix(&self) -> &'static Coefficients {
        match self {
            Self::Protan => &matrices::PROTANOPIA,
            Self::Deutan => &matrices::DEUTERANOPIA,
        }
    }
}

/// Per-deficiency simulation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeficiencyProfile {
    /// Whether this deficiency contributes to the effective matrix
    pub enabled: bool,

    /// Blend factor in [0, 1] from identity toward the deficiency matrix
    pub intensity: f32,
}

impl Default for DeficiencyProfile {
    fn default() -> Self {
        Self {
            enabled: false,
            intensity: 0.5,
        }
    }
}

/// The full simulation state for one editing session
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VisionState {
    pub protan: DeficiencyProfile,
    pub deutan: DeficiencyProfile,
}

/// Derived result of a [`VisionState`]: the matrix to hand to the display
/// surface plus the label describing the active simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveMatrix {
    /// The 4x5 transform to apply per pixel
    pub coefficients: Coefficients,

    /// "Original" when nothing is enabled, otherwise the enabled short
    /// codes with intensity percentages, e.g. "Red-Green (P:50%, D:50%)"
    pub label: String,
}

impl VisionState {
    /// The profile for one deficiency
    pub fn profile(&self, deficiency: Deficiency) -> DeficiencyProfile {
        match deficiency {
            Deficiency::Protan => self.protan,
            Deficiency::Deutan => self.deutan,
        }
    }

    /// Mutable access for UI controls bound to one deficiency
    pub fn profile_mut(&mut self, deficiency: Deficiency) -> &mut DeficiencyProfile {
        match deficiency {
            Deficiency::Protan => &mut self.protan,
            Deficiency::Deutan => &mut self.deutan,
        }
    }

    /// Whether any deficiency contributes to the effective matrix
    pub fn any_enabled(&self) -> bool {
        Deficiency::ALL.iter().any(|d| self.profile(*d).enabled)
    }

    /// Derive the effective matrix and display label from the current state.
    ///
    /// Starts from identity and, for each enabled deficiency in
    /// [`Deficiency::ALL`] order, folds in the interpolated simulation via
    /// [`combine`]. With nothing enabled the result is identity exactly.
    /// An enabled profile at intensity 0 still passes through the fold
    /// (interpolation at t = 0 yields identity, which the clamped combine
    /// absorbs without changing the running matrix).
    pub fn effective(&self) -> EffectiveMatrix {
        if !self.any_enabled() {
            return EffectiveMatrix {
                coefficients: matrices::IDENTITY,
                label: "Original".to_string(),
            };
        }

        let mut running = matrices::IDENTITY;
        let mut parts = Vec::new();

        for deficiency in Deficiency::ALL {
            let profile = self.profile(deficiency);
            if !profile.enabled {
                continue;
            }

            let interpolated =
                interpolate(&matrices::IDENTITY, deficiency.base_matrix(), profile.intensity);
            running = combine(&running, &interpolated);

            parts.push(format!(
                "{}:{}%",
                deficiency.short_code(),
                (profile.intensity * 100.0).round() as u32
            ));
        }

        EffectiveMatrix {
            coefficients: running,
            label: format!("Red-Green ({})", parts.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::{IDENTITY, PROTANOPIA};

    #[test]
    fn test_all_disabled_returns_identity() {
        let state = VisionState::default();
        let effective = state.effective();
        assert_eq!(effective.coefficients, IDENTITY);
        assert_eq!(effective.label, "Original");
    }

    #[test]
    fn test_protan_only_derivation() {
        let mut state = VisionState::default();
        state.protan.enabled = true;
        state.protan.intensity = 0.5;

        let effective = state.effective();
        let expected = combine(&IDENTITY, &interpolate(&IDENTITY, &PROTANOPIA, 0.5));
        assert_eq!(effective.coefficients, expected);
        assert_eq!(effective.label, "Red-Green (P:50%)");
    }

    #[test]
    fn test_both_enabled_label() {
        let state = VisionState {
            protan: DeficiencyProfile {
                enabled: true,
                intensity: 0.5,
            },
            deutan: DeficiencyProfile {
                enabled: true,
                intensity: 0.5,
            },
        };
        assert_eq!(state.effective().label, "Red-Green (P:50%, D:50%)");
    }

    #[test]
    fn test_deutan_only_label_and_percent_rounding() {
        let mut state = VisionState::default();
        state.deutan.enabled = true;
        state.deutan.intensity = 0.746;
        assert_eq!(state.effective().label, "Red-Green (D:75%)");
    }

    #[test]
    fn test_enabled_at_zero_intensity_still_folds() {
        // interpolate(identity, base, 0) == identity, and
        // combine(identity, identity) clamps the diagonal back to 1, so the
        // result is identity bit-for-bit
        let mut state = VisionState::default();
        state.protan.enabled = true;
        state.protan.intensity = 0.0;

        let effective = state.effective();
        assert_eq!(effective.coefficients, IDENTITY);
        assert_eq!(effective.label, "Red-Green (P:0%)");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let state = VisionState {
            protan: DeficiencyProfile {
                enabled: true,
                intensity: 0.37,
            },
            deutan: DeficiencyProfile {
                enabled: true,
                intensity: 0.81,
            },
        };

        let a = state.effective();
        let b = state.effective();
        for i in 0..20 {
            assert_eq!(
                a.coefficients[i].to_bits(),
                b.coefficients[i].to_bits(),
                "index {}",
                i
            );
        }
        assert_eq!(a.label, b.label);
    }

    #[test]
    fn test_fold_order_is_protan_first() {
        assert_eq!(Deficiency::ALL, [Deficiency::Protan, Deficiency::Deutan]);
    }
}
