//! Input expansion, output naming, and single-image simulation

use std::path::{Path, PathBuf};

use chromasim_core::decoders::decode_image;
use chromasim_core::exporters::export_png;
use chromasim_core::matrices::Coefficients;
use chromasim_core::render::apply_color_matrix;
use chromasim_core::verbose_println;

/// Supported image extensions for batch processing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "tif", "tiff"];

/// Determine output path based on input and optional output dir/path.
///
/// A directory (or nothing) yields `<stem>_simulated.png` in that directory
/// (or beside the input); a file path is used as-is.
pub fn determine_output_path(input: &Path, out: &Option<PathBuf>) -> Result<PathBuf, String> {
    let filename = input
        .file_stem()
        .ok_or("Invalid input filename")?
        .to_string_lossy();
    let simulated_name = format!("{}_simulated.png", filename);

    if let Some(out_path) = out {
        if out_path.is_dir() {
            Ok(out_path.join(simulated_name))
        } else {
            Ok(out_path.clone())
        }
    } else {
        let parent = input.parent().unwrap_or(Path::new("."));
        Ok(parent.join(simulated_name))
    }
}

/// Expand a list of inputs (files and directories) into a list of image files.
///
/// Directories are scanned for supported image files. If `recursive` is
/// true, subdirectories are also scanned.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            collect_images_from_dir(input, recursive, &mut files)?;
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("Input not found: {}", input.display()));
        }
    }

    files.sort();
    Ok(files)
}

fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() {
            if recursive {
                collect_images_from_dir(&path, recursive, files)?;
            }
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                files.push(path);
            }
        }
    }

    Ok(())
}

/// Decode one image, apply the effective matrix, and export the result.
/// Returns the written output path.
pub fn simulate_single(
    input: &Path,
    out: &Option<PathBuf>,
    matrix: &Coefficients,
) -> Result<PathBuf, String> {
    let mut image = decode_image(input)?;
    verbose_println!(
        "[SIMULATE] {} ({}x{})",
        input.display(),
        image.width,
        image.height
    );

    apply_color_matrix(&mut image.data, matrix);

    let output = determine_output_path(input, out)?;
    export_png(&image, &output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_output_path_beside_input() {
        let path = determine_output_path(Path::new("/photos/cat.png"), &None).unwrap();
        assert_eq!(path, PathBuf::from("/photos/cat_simulated.png"));
    }

    #[test]
    fn test_determine_output_path_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = Some(dir.path().to_path_buf());
        let path = determine_output_path(Path::new("cat.tif"), &out).unwrap();
        assert_eq!(path, dir.path().join("cat_simulated.png"));
    }

    #[test]
    fn test_determine_output_path_explicit_file() {
        let out = Some(PathBuf::from("/tmp/result.png"));
        let path = determine_output_path(Path::new("cat.png"), &out).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/result.png"));
    }

    #[test]
    fn test_expand_inputs_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"x").unwrap();
        std::fs::write(dir.path().join("b.tiff"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let files = expand_inputs(&[dir.path().to_path_buf()], false).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_expand_inputs_missing_path_is_error() {
        assert!(expand_inputs(&[PathBuf::from("/no/such/file.png")], false).is_err());
    }
}
