use clap::Args;
use serde::Serialize;

use deckhand::build::CommandBuildRunner;
use deckhand::pipeline::{self, PipelineRunResult, RunStatus};
use deckhand::publish::SimulatedPublisher;
use deckhand::{config, PipelineConfig};

use super::{CmdResult, ConfigFileArgs};

#[derive(Args)]
pub struct DeployArgs {
    #[command(flatten)]
    pub config_file: ConfigFileArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployOutput {
    pub command: String,
    pub config: PipelineConfig,
    #[serde(flatten)]
    pub run: PipelineRunResult,
}

pub fn run(args: DeployArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<DeployOutput> {
    let cfg = config::load(args.config_file.config.as_deref())?;

    let runner = CommandBuildRunner::from_config(&cfg);
    let publisher = SimulatedPublisher::from_config(&cfg);
    let result = pipeline::run(&cfg, &runner, &publisher);

    let exit_code = match result.status {
        RunStatus::Success => 0,
        RunStatus::Failed => 1,
    };

    Ok((
        DeployOutput {
            command: "deploy.run".to_string(),
            config: cfg,
            run: result,
        },
        exit_code,
    ))
}
