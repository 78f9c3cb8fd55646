use clap::Args;
use serde::Serialize;

use deckhand::config;
use deckhand::validate::{self, ValidationResult};

use super::{CmdResult, ConfigFileArgs};

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config_file: ConfigFileArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateOutput {
    pub command: String,
    #[serde(flatten)]
    pub validation: ValidationResult,
}

pub fn run(args: ValidateArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ValidateOutput> {
    let cfg = config::load(args.config_file.config.as_deref())?;

    let validation = validate::run(&cfg.build_dir_path())?;
    let exit_code = if validation.passed { 0 } else { 1 };

    Ok((
        ValidateOutput {
            command: "validate.run".to_string(),
            validation,
        },
        exit_code,
    ))
}
