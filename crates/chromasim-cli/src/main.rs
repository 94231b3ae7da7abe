use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "chromasim")]
#[command(version, about = "Color vision deficiency simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a simulation to a single image
    Simulate {
        /// Input file (PNG or TIFF)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file or directory (defaults to <stem>_simulated.png beside the input)
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Protanopia intensity (0.0-1.0); enables the protan profile
        #[arg(long, value_name = "T")]
        protan: Option<f32>,

        /// Deuteranopia intensity (0.0-1.0); enables the deutan profile
        #[arg(long, value_name = "T")]
        deutan: Option<f32>,

        /// Apply the grayscale preset instead of deficiency simulation
        #[arg(long, conflicts_with_all = ["protan", "deutan"])]
        grayscale: bool,

        /// Suppress progress output
        #[arg(long)]
        silent: bool,

        /// Enable verbose debug output
        #[arg(long)]
        verbose: bool,
    },

    /// Apply a simulation to multiple images in parallel
    Batch {
        /// Input files or directories
        #[arg(value_name = "INPUTS")]
        inputs: Vec<PathBuf>,

        /// Scan directories recursively
        #[arg(short, long)]
        recursive: bool,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Protanopia intensity (0.0-1.0); enables the protan profile
        #[arg(long, value_name = "T")]
        protan: Option<f32>,

        /// Deuteranopia intensity (0.0-1.0); enables the deutan profile
        #[arg(long, value_name = "T")]
        deutan: Option<f32>,

        /// Apply the grayscale preset instead of deficiency simulation
        #[arg(long, conflicts_with_all = ["protan", "deutan"])]
        grayscale: bool,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Suppress progress output
        #[arg(long)]
        silent: bool,

        /// Enable verbose debug output
        #[arg(long)]
        verbose: bool,
    },

    /// Print the derived effective matrix without touching any image
    Matrix {
        /// Protanopia intensity (0.0-1.0); enables the protan profile
        #[arg(long, value_name = "T")]
        protan: Option<f32>,

        /// Deuteranopia intensity (0.0-1.0); enables the deutan profile
        #[arg(long, value_name = "T")]
        deutan: Option<f32>,

        /// Show the grayscale preset instead of deficiency simulation
        #[arg(long, conflicts_with_all = ["protan", "deutan"])]
        grayscale: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            input,
            out,
            protan,
            deutan,
            grayscale,
            silent,
            verbose,
        } => commands::cmd_simulate(input, out, protan, deutan, grayscale, silent, verbose),
        Commands::Batch {
            inputs,
            recursive,
            out,
            protan,
            deutan,
            grayscale,
            threads,
            silent,
            verbose,
        } => commands::cmd_batch(
            inputs, recursive, out, protan, deutan, grayscale, threads, silent, verbose,
        ),
        Commands::Matrix {
            protan,
            deutan,
            grayscale,
        } => commands::cmd_matrix(protan, deutan, grayscale),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
