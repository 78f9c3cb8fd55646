use clap::Args;
use serde::Serialize;

use deckhand::build::{BuildOutput, BuildRunner, CommandBuildRunner};
use deckhand::config;

use super::{CmdResult, ConfigFileArgs};

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config_file: ConfigFileArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildCmdOutput {
    pub command: String,
    #[serde(flatten)]
    pub build: BuildOutput,
}

pub fn run(args: BuildArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<BuildCmdOutput> {
    let cfg = config::load(args.config_file.config.as_deref())?;

    let build = CommandBuildRunner::from_config(&cfg).run()?;
    let exit_code = if build.success { 0 } else { 1 };

    Ok((
        BuildCmdOutput {
            command: "build.run".to_string(),
            build,
        },
        exit_code,
    ))
}
