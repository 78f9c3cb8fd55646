use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod tty;

use commands::{backup, build, config, deploy, init, publish, report, validate};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "deckhand")]
#[command(version = VERSION)]
#[command(about = "CLI deployment pipeline for static-site build output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full deployment pipeline
    Deploy(deploy::DeployArgs),
    /// Back up the current build output
    Backup(backup::BackupArgs),
    /// Run the configured build command
    Build(build::BuildArgs),
    /// Validate the build output
    Validate(validate::ValidateArgs),
    /// Generate the deployment report
    Report(report::ReportArgs),
    /// Publish the build output (simulated)
    Publish(publish::PublishArgs),
    /// Show the effective pipeline configuration
    Config(config::ConfigArgs),
    /// Write a starter deckhand.json
    Init(init::InitArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    deckhand::output::print_json_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
