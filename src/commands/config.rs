use clap::Args;
use serde::Serialize;

use deckhand::{config, PipelineConfig};

use super::{CmdResult, ConfigFileArgs};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub config_file: ConfigFileArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOutput {
    pub path: String,
    pub exists: bool,
    #[serde(flatten)]
    pub config: PipelineConfig,
}

pub fn run(args: ConfigArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ConfigOutput> {
    let path = config::resolve_path(args.config_file.config.as_deref());
    let exists = path.exists();
    let config = config::load(args.config_file.config.as_deref())?;

    Ok((
        ConfigOutput {
            path: path.to_string_lossy().into_owned(),
            exists,
            config,
        },
        0,
    ))
}
