//! Shared utilities for chromasim-cli
//!
//! Reusable parsing and processing helpers shared between the CLI commands.

pub mod parsers;
pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use parsers::{build_effective_matrix, parse_intensity};
pub use processing::{determine_output_path, expand_inputs, simulate_single, SUPPORTED_EXTENSIONS};
