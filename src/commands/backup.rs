use clap::Args;
use serde::Serialize;

use deckhand::backup::{self, BackupRecord};
use deckhand::config;

use super::{CmdResult, ConfigFileArgs};

#[derive(Args)]
pub struct BackupArgs {
    #[command(flatten)]
    pub config_file: ConfigFileArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupOutput {
    pub command: String,
    pub created: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<BackupRecord>,
}

pub fn run(args: BackupArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<BackupOutput> {
    let cfg = config::load(args.config_file.config.as_deref())?;

    // Standalone backups surface copy errors directly; only the pipeline
    // treats them as best-effort.
    let backup = backup::create(&cfg)?;

    Ok((
        BackupOutput {
            command: "backup.create".to_string(),
            created: backup.is_some(),
            backup,
        },
        0,
    ))
}
