//! The five-stage deployment pipeline.
//!
//! Stages run in a fixed order: backup, build, validate, report, publish.
//! The first failing stage terminates the run; later stages are recorded as
//! skipped. Backup is best-effort: its errors degrade to warnings so a
//! missing or unreadable backup never blocks a release.

use serde::{Deserialize, Serialize};

use crate::backup;
use crate::build::{self, BuildRunner};
use crate::config::PipelineConfig;
use crate::publish::Publisher;
use crate::report;
use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Backup,
    Build,
    Validate,
    Report,
    Publish,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Backup => "backup",
            Stage::Build => "build",
            Stage::Validate => "validate",
            Stage::Report => "report",
            Stage::Publish => "publish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Success,
    Warning,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageResult {
    pub stage: Stage,
    pub status: StageStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StageResult {
    fn success(stage: Stage, data: Option<serde_json::Value>) -> Self {
        Self {
            stage,
            status: StageStatus::Success,
            warnings: Vec::new(),
            data,
            error: None,
        }
    }

    fn warning(stage: Stage, message: String) -> Self {
        Self {
            stage,
            status: StageStatus::Warning,
            warnings: vec![message],
            data: None,
            error: None,
        }
    }

    fn failed(stage: Stage, error: String, data: Option<serde_json::Value>) -> Self {
        Self {
            stage,
            status: StageStatus::Failed,
            warnings: Vec::new(),
            data,
            error: Some(error),
        }
    }

    fn skipped(stage: Stage) -> Self {
        Self {
            stage,
            status: StageStatus::Skipped,
            warnings: Vec::new(),
            data: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunSummary {
    pub total_stages: usize,
    pub succeeded: usize,
    pub warnings: usize,
    pub failed: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunResult {
    pub stages: Vec<StageResult>,
    pub status: RunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    pub summary: PipelineRunSummary,
}

/// Run the full pipeline.
///
/// Every failure mode is typed into the returned record; this function
/// itself never errors.
pub fn run(
    config: &PipelineConfig,
    runner: &dyn BuildRunner,
    publisher: &dyn Publisher,
) -> PipelineRunResult {
    let mut stages = Vec::with_capacity(5);

    stages.push(backup_stage(config));

    let remaining: &[Stage] = &[Stage::Build, Stage::Validate, Stage::Report, Stage::Publish];
    for (index, stage) in remaining.iter().enumerate() {
        let result = match stage {
            Stage::Build => build_stage(runner),
            Stage::Validate => validate_stage(config),
            Stage::Report => report_stage(config),
            Stage::Publish => publish_stage(config, publisher),
            Stage::Backup => unreachable!("backup runs before the fallible stages"),
        };
        let failed = result.status == StageStatus::Failed;
        stages.push(result);

        if failed {
            for skipped in &remaining[index + 1..] {
                stages.push(StageResult::skipped(*skipped));
            }
            break;
        }
    }

    finish(stages)
}

fn backup_stage(config: &PipelineConfig) -> StageResult {
    match backup::create(config) {
        Ok(Some(record)) => {
            StageResult::success(Stage::Backup, serde_json::to_value(record).ok())
        }
        Ok(None) => StageResult::success(Stage::Backup, None),
        // Best-effort: a failed backup is worth knowing about, never worth
        // blocking the release over.
        Err(err) => StageResult::warning(Stage::Backup, format!("Backup failed: {}", err)),
    }
}

fn build_stage(runner: &dyn BuildRunner) -> StageResult {
    match runner.run() {
        Ok(output) if output.success => {
            StageResult::success(Stage::Build, serde_json::to_value(&output).ok())
        }
        Ok(output) => {
            let error = build::format_build_error(&output);
            let data = serde_json::to_value(&output).ok();
            StageResult::failed(Stage::Build, error, data)
        }
        Err(err) => StageResult::failed(Stage::Build, err.to_string(), None),
    }
}

fn validate_stage(config: &PipelineConfig) -> StageResult {
    match validate::run(&config.build_dir_path()) {
        Ok(result) if result.passed => {
            let mut stage = StageResult::success(
                Stage::Validate,
                serde_json::to_value(&result).ok(),
            );
            if !result.large_files.is_empty() {
                stage.warnings.push(format!(
                    "Large files detected: {}",
                    result.large_files.join(", ")
                ));
            }
            stage
        }
        Ok(result) => {
            let error = format!("Missing build files: {}", result.missing_files.join(", "));
            let data = serde_json::to_value(&result).ok();
            StageResult::failed(Stage::Validate, error, data)
        }
        Err(err) => StageResult::failed(Stage::Validate, err.to_string(), None),
    }
}

fn report_stage(config: &PipelineConfig) -> StageResult {
    match report::generate(&config.build_dir_path()) {
        Ok(report) => StageResult::success(Stage::Report, serde_json::to_value(&report).ok()),
        Err(err) => StageResult::failed(Stage::Report, err.to_string(), None),
    }
}

fn publish_stage(config: &PipelineConfig, publisher: &dyn Publisher) -> StageResult {
    match publisher.publish(&config.build_dir_path()) {
        Ok(outcome) => StageResult::success(Stage::Publish, serde_json::to_value(&outcome).ok()),
        Err(err) => StageResult::failed(Stage::Publish, err.to_string(), None),
    }
}

fn finish(stages: Vec<StageResult>) -> PipelineRunResult {
    let failed_stage = stages
        .iter()
        .find(|s| s.status == StageStatus::Failed)
        .map(|s| s.stage);
    let failure = stages
        .iter()
        .find(|s| s.status == StageStatus::Failed)
        .and_then(|s| s.error.clone())
        .map(|cause| {
            let stage = failed_stage.map(|s| s.as_str()).unwrap_or("unknown");
            format!("{} stage failed: {}", stage, cause)
        });

    let summary = PipelineRunSummary {
        total_stages: stages.len(),
        succeeded: count(&stages, StageStatus::Success),
        warnings: count(&stages, StageStatus::Warning),
        failed: count(&stages, StageStatus::Failed),
        skipped: count(&stages, StageStatus::Skipped),
    };

    let status = if failed_stage.is_some() {
        RunStatus::Failed
    } else {
        RunStatus::Success
    };

    PipelineRunResult {
        stages,
        status,
        failed_stage,
        failure,
        summary,
    }
}

fn count(stages: &[StageResult], status: StageStatus) -> usize {
    stages.iter().filter(|s| s.status == status).count()
}
