use clap::Args;
use serde::Serialize;

use deckhand::config;
use deckhand::publish::{PublishOutcome, Publisher, SimulatedPublisher};

use super::{CmdResult, ConfigFileArgs};

#[derive(Args)]
pub struct PublishArgs {
    #[command(flatten)]
    pub config_file: ConfigFileArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOutput {
    pub command: String,
    #[serde(flatten)]
    pub outcome: PublishOutcome,
}

pub fn run(args: PublishArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<PublishOutput> {
    let cfg = config::load(args.config_file.config.as_deref())?;

    let outcome = SimulatedPublisher::from_config(&cfg).publish(&cfg.build_dir_path())?;

    Ok((
        PublishOutput {
            command: "publish.run".to_string(),
            outcome,
        },
        0,
    ))
}
