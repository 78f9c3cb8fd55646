//! Build-output validation.
//!
//! Checks that the required site entry points exist and reports their sizes.
//! Oversized files are advisory only; they never fail the stage.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::fmt::format_bytes;

/// Files every publishable build must contain, directly in the build root.
pub const REQUIRED_FILES: &[&str] = &["index.html", "styles.min.css", "scripts.min.js"];

/// Advisory threshold: files above this are flagged, not rejected.
pub const LARGE_FILE_BYTES: u64 = 1024 * 1024;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckedFile {
    pub name: String,
    pub size: u64,
    pub formatted_size: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub passed: bool,
    pub missing_files: Vec<String>,
    pub files: Vec<CheckedFile>,
    pub large_files: Vec<String>,
}

/// Validate the build-output directory.
///
/// Returns the complete missing-file list (not just the first hit) so one
/// failed run shows everything that needs fixing. A build directory that
/// does not exist at all reports every required file as missing.
pub fn run(build_dir: &Path) -> Result<ValidationResult> {
    let missing_files: Vec<String> = REQUIRED_FILES
        .iter()
        .filter(|name| !build_dir.join(name).is_file())
        .map(|name| name.to_string())
        .collect();

    if !missing_files.is_empty() {
        return Ok(ValidationResult {
            passed: false,
            missing_files,
            files: Vec::new(),
            large_files: Vec::new(),
        });
    }

    let mut files = Vec::with_capacity(REQUIRED_FILES.len());
    for name in REQUIRED_FILES {
        let metadata = fs::metadata(build_dir.join(name)).map_err(|e| {
            Error::internal_io(
                format!("Failed to stat {}: {}", name, e),
                Some("validate build".to_string()),
            )
        })?;
        files.push(CheckedFile {
            name: name.to_string(),
            size: metadata.len(),
            formatted_size: format_bytes(metadata.len()),
        });
    }

    let large_files: Vec<String> = files
        .iter()
        .filter(|f| f.size > LARGE_FILE_BYTES)
        .map(|f| f.name.clone())
        .collect();

    if !large_files.is_empty() {
        crate::log_status!("validate", "Large files detected: {}", large_files.join(", "));
    }

    Ok(ValidationResult {
        passed: true,
        missing_files: Vec::new(),
        files,
        large_files,
    })
}
