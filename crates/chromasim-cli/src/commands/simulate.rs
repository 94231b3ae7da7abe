use std::path::PathBuf;
use std::time::Instant;

use chromasim_cli::{build_effective_matrix, simulate_single};

/// Execute the simulate command for a single image.
///
/// Decodes the input, derives the effective matrix from the flags, applies
/// it per pixel, and exports the result as PNG.
pub fn cmd_simulate(
    input: PathBuf,
    out: Option<PathBuf>,
    protan: Option<f32>,
    deutan: Option<f32>,
    grayscale: bool,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let start_time = Instant::now();

    if verbose {
        chromasim_core::config::set_verbose(true);
        chromasim_core::config::log_config_usage();
    }

    let effective = build_effective_matrix(protan, deutan, grayscale)?;

    if !silent {
        println!("Simulating: {}", effective.label);
    }

    let output = simulate_single(&input, &out, &effective.coefficients)?;

    if !silent {
        println!(
            "Wrote {} in {:.2}s",
            output.display(),
            start_time.elapsed().as_secs_f32()
        );
    }

    Ok(())
}
