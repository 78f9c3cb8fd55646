//! Backup of the current build output.
//!
//! Copies the build-output directory into a timestamp-named subdirectory of
//! the backup root before a new build overwrites it.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::PipelineConfig;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRecord {
    pub path: String,
    pub timestamp: String,
    pub file_count: usize,
}

/// Directory name for a backup taken at `instant`.
///
/// ISO-8601 with `:` and `.` replaced by `-` so the name is filesystem-safe
/// on every platform and still sorts chronologically.
pub fn backup_dir_name(instant: DateTime<Utc>) -> String {
    let iso = instant.to_rfc3339_opts(SecondsFormat::Millis, true);
    let safe: String = iso
        .chars()
        .map(|c| if c == ':' || c == '.' { '-' } else { c })
        .collect();
    format!("backup-{}", safe)
}

/// Back up the build-output directory, if it exists.
///
/// Returns `Ok(None)` when there is nothing to back up yet; that is a normal
/// first-run condition, not a failure.
pub fn create(config: &PipelineConfig) -> Result<Option<BackupRecord>> {
    let build_dir = config.build_dir_path();
    if !build_dir.exists() {
        return Ok(None);
    }

    let backup_root = config.backup_dir_path();
    fs::create_dir_all(&backup_root).map_err(|e| {
        Error::internal_io(e.to_string(), Some("create backup directory".to_string()))
    })?;

    let instant = Utc::now();
    let target = backup_root.join(backup_dir_name(instant));
    let file_count = copy_dir_recursive(&build_dir, &target)?;

    crate::log_status!("backup", "Backup created: {}", target.display());

    Ok(Some(BackupRecord {
        path: target.to_string_lossy().into_owned(),
        timestamp: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        file_count,
    }))
}

/// Copy a directory tree, returning the number of files copied.
fn copy_dir_recursive(source: &Path, target: &Path) -> Result<usize> {
    fs::create_dir_all(target).map_err(|e| {
        Error::internal_io(e.to_string(), Some("create backup directory".to_string()))
    })?;

    let entries = fs::read_dir(source).map_err(|e| {
        Error::internal_io(e.to_string(), Some("list backup source".to_string()))
    })?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::internal_io(e.to_string(), Some("list backup source".to_string()))
        })?;
        let source_path = entry.path();
        let target_path = target.join(entry.file_name());

        if source_path.is_dir() {
            copied += copy_dir_recursive(&source_path, &target_path)?;
        } else {
            fs::copy(&source_path, &target_path).map_err(|e| {
                Error::internal_io(
                    format!("Failed to copy {}: {}", source_path.display(), e),
                    Some("copy backup file".to_string()),
                )
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}
