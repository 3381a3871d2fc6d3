//! Output path handling for exported sketches.

use super::ExportError;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(directory.to_path_buf())
}

/// Resolves where an export should be written.
///
/// A path naming an existing directory (or ending in a separator) gets a
/// generated file name; any other path is used as-is with its parent created.
pub fn resolve_output_path(
    target: &Path,
    template: &str,
    format: &str,
) -> Result<PathBuf, ExportError> {
    let names_directory = target.is_dir()
        || target
            .to_str()
            .is_some_and(|s| s.ends_with(std::path::MAIN_SEPARATOR));

    if names_directory {
        let directory = ensure_directory_exists(target)?;
        return Ok(directory.join(generate_filename(template, format)));
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }
    Ok(target.to_path_buf())
}
