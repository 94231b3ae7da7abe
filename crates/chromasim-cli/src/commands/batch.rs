use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use chromasim_cli::{build_effective_matrix, expand_inputs, simulate_single};

/// Execute the batch command: apply one simulation to many images in
/// parallel, sharing the derived matrix across all of them.
#[allow(clippy::too_many_arguments)]
pub fn cmd_batch(
    inputs: Vec<PathBuf>,
    recursive: bool,
    out: Option<PathBuf>,
    protan: Option<f32>,
    deutan: Option<f32>,
    grayscale: bool,
    threads: Option<usize>,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let start_time = Instant::now();

    if verbose {
        chromasim_core::config::set_verbose(true);
    }

    if let Some(n) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
    }

    let effective = build_effective_matrix(protan, deutan, grayscale)?;

    let files = expand_inputs(&inputs, recursive)?;
    if files.is_empty() {
        return Err("No supported image files found".to_string());
    }

    if !silent {
        println!("Simulating {} on {} file(s)...", effective.label, files.len());
    }

    if let Some(ref dir) = out {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }

    let succeeded = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    files.par_iter().for_each(|input| {
        match simulate_single(input, &out, &effective.coefficients) {
            Ok(output) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                if !silent {
                    println!("  {} -> {}", input.display(), output.display());
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                eprintln!("  {} failed: {}", input.display(), e);
            }
        }
    });

    let ok = succeeded.load(Ordering::Relaxed);
    let bad = failed.load(Ordering::Relaxed);

    if !silent {
        println!(
            "Done: {} succeeded, {} failed in {:.2}s",
            ok,
            bad,
            start_time.elapsed().as_secs_f32()
        );
    }

    if bad > 0 {
        Err(format!("{} file(s) failed", bad))
    } else {
        Ok(())
    }
}
