use clap::Args;
use serde::Serialize;

use deckhand::{config, PipelineConfig};

use super::{CmdResult, ConfigFileArgs};

#[derive(Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub config_file: ConfigFileArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOutput {
    pub path: String,
    pub created: bool,
    #[serde(flatten)]
    pub config: PipelineConfig,
}

pub fn run(args: InitArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<InitOutput> {
    let path = config::resolve_path(args.config_file.config.as_deref());
    let config = config::write_starter(&path)?;

    Ok((
        InitOutput {
            path: path.to_string_lossy().into_owned(),
            created: true,
            config,
        },
        0,
    ))
}
