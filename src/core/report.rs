//! Deployment report generation.
//!
//! Records what is about to ship: every file in the build output with its
//! size, plus aggregate metrics, serialized next to the assets themselves.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::fmt::format_bytes;
use crate::utils::io;

/// Report file written inside the build-output directory.
pub const REPORT_FILE_NAME: &str = "deployment-report.json";

/// Fixed report schema version.
pub const REPORT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFileEntry {
    pub name: String,
    pub size: u64,
    pub formatted_size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetrics {
    pub total_size: u64,
    pub file_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentReport {
    pub timestamp: String,
    pub version: String,
    pub files: Vec<ReportFileEntry>,
    pub metrics: ReportMetrics,
}

/// Build the report for `build_dir` as of `instant`.
///
/// Only regular files directly inside the directory are listed;
/// subdirectories are deliberately skipped. Entries are sorted by name so
/// the report is stable across filesystems.
pub fn build_report(build_dir: &Path, instant: DateTime<Utc>) -> Result<DeploymentReport> {
    let mut files = Vec::new();

    if build_dir.exists() {
        let entries = fs::read_dir(build_dir).map_err(|e| {
            Error::internal_io(e.to_string(), Some("list build directory".to_string()))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                Error::internal_io(e.to_string(), Some("list build directory".to_string()))
            })?;
            let metadata = entry.metadata().map_err(|e| {
                Error::internal_io(e.to_string(), Some("stat build file".to_string()))
            })?;
            if !metadata.is_file() {
                continue;
            }

            let size = metadata.len();
            files.push(ReportFileEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                size,
                formatted_size: format_bytes(size),
            });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let total_size = files.iter().map(|f| f.size).sum();
    let file_count = files.len();

    Ok(DeploymentReport {
        timestamp: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        version: REPORT_VERSION.to_string(),
        files,
        metrics: ReportMetrics {
            total_size,
            file_count,
        },
    })
}

/// Generate the report and write it into the build-output directory.
pub fn generate(build_dir: &Path) -> Result<DeploymentReport> {
    let report = build_report(build_dir, Utc::now())?;

    let payload = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize report".to_string())))?;
    io::write_file_atomic(
        &build_dir.join(REPORT_FILE_NAME),
        &payload,
        "write deployment report",
    )?;

    crate::log_status!("report", "Deployment report generated");

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn metrics_match_the_listed_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), vec![0u8; 100]).unwrap();
        fs::write(dir.path().join("styles.min.css"), vec![0u8; 50]).unwrap();

        let report = build_report(dir.path(), Utc::now()).unwrap();
        assert_eq!(report.metrics.file_count, report.files.len());
        assert_eq!(
            report.metrics.total_size,
            report.files.iter().map(|f| f.size).sum::<u64>()
        );
        assert_eq!(report.metrics.total_size, 150);
    }

    #[test]
    fn subdirectories_are_skipped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "x").unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets").join("logo.svg"), "y").unwrap();

        let report = build_report(dir.path(), Utc::now()).unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].name, "index.html");
    }

    #[test]
    fn entries_are_sorted_by_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("zeta.js"), "z").unwrap();
        fs::write(dir.path().join("alpha.css"), "a").unwrap();

        let report = build_report(dir.path(), Utc::now()).unwrap();
        let names: Vec<&str> = report.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["alpha.css", "zeta.js"]);
    }

    #[test]
    fn missing_directory_yields_an_empty_report() {
        let dir = tempdir().unwrap();
        let report = build_report(&dir.path().join("absent"), Utc::now()).unwrap();
        assert_eq!(report.metrics.file_count, 0);
        assert_eq!(report.metrics.total_size, 0);
        assert!(report.files.is_empty());
    }

    #[test]
    fn generate_writes_a_round_trippable_report() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let report = generate(dir.path()).unwrap();

        let raw = fs::read_to_string(dir.path().join(REPORT_FILE_NAME)).unwrap();
        let parsed: DeploymentReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.version, REPORT_VERSION);
        assert_eq!(parsed.metrics.file_count, report.metrics.file_count);
        // Pretty-printed, camelCase wire fields
        assert!(raw.contains("\"formattedSize\""));
        assert!(raw.contains("\"totalSize\""));
    }
}
