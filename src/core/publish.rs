//! Publish capability.
//!
//! The pipeline publishes through the `Publisher` trait so a real hosting
//! target can be substituted without touching the stage sequencing. The
//! stock implementation is a simulation: it performs no network or
//! version-control operation.

use serde::Serialize;
use std::path::Path;

use crate::config::PipelineConfig;
use crate::error::Result;

pub trait Publisher {
    fn publish(&self, build_dir: &Path) -> Result<PublishOutcome>;
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOutcome {
    pub target: String,
    pub branch: String,
    pub site_url: String,
    pub simulated: bool,
}

/// Derive the public site URL from a GitHub remote.
///
/// `https://github.com/<user>/<repo>.git` maps to
/// `https://<user>.github.io/<repo>`; anything else falls back to the
/// remote URL itself.
pub fn site_url_for_remote(remote_repo: &str) -> String {
    let trimmed = remote_repo.trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    if let Some(rest) = trimmed.strip_prefix("https://github.com/") {
        let mut parts = rest.splitn(2, '/');
        if let (Some(user), Some(repo)) = (parts.next(), parts.next()) {
            if !user.is_empty() && !repo.is_empty() && !repo.contains('/') {
                return format!("https://{}.github.io/{}", user, repo);
            }
        }
    }

    remote_repo.to_string()
}

/// Simulated GitHub Pages publisher. Always succeeds.
pub struct SimulatedPublisher {
    remote_repo: String,
    branch: String,
}

impl SimulatedPublisher {
    pub fn new(remote_repo: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            remote_repo: remote_repo.into(),
            branch: branch.into(),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.remote_repo.clone(), config.branch.clone())
    }
}

impl Publisher for SimulatedPublisher {
    fn publish(&self, _build_dir: &Path) -> Result<PublishOutcome> {
        let site_url = site_url_for_remote(&self.remote_repo);

        crate::log_status!("publish", "Deployment simulation complete");
        crate::log_status!("publish", "Your site should be available at: {}", site_url);

        Ok(PublishOutcome {
            target: self.remote_repo.clone(),
            branch: self.branch.clone(),
            site_url,
            simulated: true,
        })
    }
}
