use clap::Args;
use serde::Serialize;

use deckhand::config;
use deckhand::report::{self, DeploymentReport};

use super::{CmdResult, ConfigFileArgs};

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub config_file: ConfigFileArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutput {
    pub command: String,
    pub path: String,
    #[serde(flatten)]
    pub report: DeploymentReport,
}

pub fn run(args: ReportArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ReportOutput> {
    let cfg = config::load(args.config_file.config.as_deref())?;

    let build_dir = cfg.build_dir_path();
    let report = report::generate(&build_dir)?;

    Ok((
        ReportOutput {
            command: "report.generate".to_string(),
            path: build_dir
                .join(report::REPORT_FILE_NAME)
                .to_string_lossy()
                .into_owned(),
            report,
        },
        0,
    ))
}
