//! Simulator configuration management
//!
//! Startup defaults for the per-deficiency profiles (which variants of the
//! feature ship enabled-by-default differs, so this is configuration rather
//! than a constant), plus the global verbose flag.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::vision::{DeficiencyProfile, VisionState};

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["chromasim.yml", "chromasim.yaml"];

/// Startup defaults for one deficiency profile
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ProfileDefaults {
    pub enabled: bool,
    pub intensity: f32,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            enabled: false,
            intensity: 0.5,
        }
    }
}

impl ProfileDefaults {
    fn sanitize(&mut self, warnings: &mut Vec<String>, name: &str) {
        if !(0.0..=1.0).contains(&self.intensity) || !self.intensity.is_finite() {
            warnings.push(format!(
                "{} intensity {} out of range, clamped to [0, 1]",
                name, self.intensity
            ));
            self.intensity = if self.intensity.is_finite() {
                self.intensity.clamp(0.0, 1.0)
            } else {
                0.5
            };
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub protan: ProfileDefaults,
    pub deutan: ProfileDefaults,
}

impl SimulatorConfig {
    fn sanitize(mut self, warnings: &mut Vec<String>) -> Self {
        self.protan.sanitize(warnings, "protan");
        self.deutan.sanitize(warnings, "deutan");
        self
    }

    /// The Vision State a new editing session starts from
    pub fn default_vision_state(&self) -> VisionState {
        VisionState {
            protan: DeficiencyProfile {
                enabled: self.protan.enabled,
                intensity: self.protan.intensity,
            },
            deutan: DeficiencyProfile {
                enabled: self.deutan.enabled,
                intensity: self.deutan.intensity,
            },
        }
    }
}

/// Public handle that stores the loaded configuration, its source path, and warnings.
pub struct ConfigHandle {
    pub config: SimulatorConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

static CONFIG: OnceLock<ConfigHandle> = OnceLock::new();

/// The process-wide configuration, loaded on first use.
pub fn config_handle() -> &'static ConfigHandle {
    CONFIG.get_or_init(load_config)
}

/// Log where the configuration came from (verbose mode only).
pub fn log_config_usage() {
    let handle = config_handle();
    match &handle.source {
        Some(path) => verbose_println!("[CONFIG] Loaded from {}", path.display()),
        None => verbose_println!("[CONFIG] Using built-in defaults"),
    }
    for warning in &handle.warnings {
        eprintln!("[WARN] config: {}", warning);
    }
}

fn load_config() -> ConfigHandle {
    for path in candidate_paths() {
        if !path.is_file() {
            continue;
        }
        match load_config_file(&path) {
            Ok((config, warnings)) => {
                return ConfigHandle {
                    config,
                    source: Some(path),
                    warnings,
                };
            }
            Err(e) => {
                return ConfigHandle {
                    config: SimulatorConfig::default(),
                    source: None,
                    warnings: vec![format!("{}: {}", path.display(), e)],
                };
            }
        }
    }

    ConfigHandle {
        config: SimulatorConfig::default(),
        source: None,
        warnings: Vec::new(),
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for name in CONFIG_FILENAMES {
        paths.push(PathBuf::from(name));
    }
    if let Some(config_dir) = dirs::config_dir() {
        for name in CONFIG_FILENAMES {
            paths.push(config_dir.join("chromasim").join(name));
        }
    }
    paths
}

fn load_config_file(path: &Path) -> Result<(SimulatorConfig, Vec<String>), String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;
    let config: SimulatorConfig =
        serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))?;

    let mut warnings = Vec::new();
    let config = config.sanitize(&mut warnings);
    Ok((config, warnings))
}
