use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::io;

/// Config file looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "deckhand.json";

/// Immutable pipeline configuration.
///
/// Loaded once per invocation; every field has a serde default so an absent
/// or sparse config file falls back to the stock static-site layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Directory the build command runs in.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Directory holding compiled site assets ready for publishing.
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// Root directory that timestamped backups are created under.
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,

    /// Remote repository the publish stage targets.
    #[serde(default = "default_remote_repo")]
    pub remote_repo: String,

    /// Branch the publish stage targets.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Opaque build collaborator, run via `sh -c` in the source directory.
    #[serde(default = "default_build_command")]
    pub build_command: String,
}

fn default_source_dir() -> String {
    ".".to_string()
}

fn default_build_dir() -> String {
    "dist".to_string()
}

fn default_backup_dir() -> String {
    "backup".to_string()
}

fn default_remote_repo() -> String {
    "https://github.com/yourusername/portfolio.git".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_build_command() -> String {
    "node build.js".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            build_dir: default_build_dir(),
            backup_dir: default_backup_dir(),
            remote_repo: default_remote_repo(),
            branch: default_branch(),
            build_command: default_build_command(),
        }
    }
}

impl PipelineConfig {
    pub fn source_dir_path(&self) -> PathBuf {
        expand_path(&self.source_dir)
    }

    pub fn build_dir_path(&self) -> PathBuf {
        expand_path(&self.build_dir)
    }

    pub fn backup_dir_path(&self) -> PathBuf {
        expand_path(&self.backup_dir)
    }

    /// Reject configurations with blank fields before any stage runs.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("sourceDir", &self.source_dir),
            ("buildDir", &self.build_dir),
            ("backupDir", &self.backup_dir),
            ("remoteRepo", &self.remote_repo),
            ("branch", &self.branch),
            ("buildCommand", &self.build_command),
        ];

        for (key, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::config_invalid_value(
                    key,
                    Some(value.clone()),
                    "must not be empty",
                ));
            }
        }

        Ok(())
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

/// Resolve the config file path from an optional explicit override.
pub fn resolve_path(explicit: Option<&str>) -> PathBuf {
    match explicit {
        Some(path) => expand_path(path),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

/// Load the pipeline configuration.
///
/// An explicitly named file must exist; the default `deckhand.json` is
/// optional and falls back to the stock configuration when absent.
pub fn load(explicit: Option<&str>) -> Result<PipelineConfig> {
    let path = resolve_path(explicit);

    if !path.exists() {
        if explicit.is_some() {
            return Err(Error::validation_invalid_argument(
                "config",
                format!("Config file not found: {}", path.display()),
                None,
                None,
            ));
        }
        return Ok(PipelineConfig::default());
    }

    load_from(&path)
}

/// Load and validate a config file at a known path.
pub fn load_from(path: &Path) -> Result<PipelineConfig> {
    let raw = io::read_file(path, "read config")?;
    let config: PipelineConfig = serde_json::from_str(&raw)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;
    config.validate()?;
    Ok(config)
}

/// Write a starter config file for `deckhand init`. Refuses to overwrite.
pub fn write_starter(path: &Path) -> Result<PipelineConfig> {
    if path.exists() {
        return Err(Error::validation_invalid_argument(
            "config",
            format!("Config file already exists: {}", path.display()),
            None,
            None,
        )
        .with_hint("Edit the existing file, or pass --config to write elsewhere"));
    }

    let config = PipelineConfig::default();
    let payload = serde_json::to_string_pretty(&config)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize config".to_string())))?;
    io::write_file(path, &payload, "write config")?;

    Ok(config)
}
