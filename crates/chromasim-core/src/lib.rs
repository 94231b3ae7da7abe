//! Chromasim Core Library
//!
//! Core functionality for simulating color vision deficiencies: 4x5 affine
//! color matrix construction, interpolation, combination, and application to
//! RGBA pixel data, plus the vision-state layer that derives the single
//! effective matrix handed to a display surface.

pub mod blend;
pub mod config;
pub mod decoders;
pub mod exporters;
pub mod matrices;
pub mod models;
pub mod render;
pub mod vision;

// Re-export commonly used types
pub use blend::{combine, coefficients_from_slice, interpolate};
pub use matrices::{ColorMatrix, Coefficients};
pub use models::SelectedImage;
pub use vision::{Deficiency, DeficiencyProfile, EffectiveMatrix, VisionState};
