use clap::Args;

pub type CmdResult<T> = deckhand::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Shared config-file selection, flattened into every subcommand.
#[derive(Args, Debug, Default)]
pub struct ConfigFileArgs {
    /// Path to the pipeline config file (defaults to deckhand.json in the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,
}

pub mod backup;
pub mod build;
pub mod config;
pub mod deploy;
pub mod init;
pub mod publish;
pub mod report;
pub mod validate;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        deckhand::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (deckhand::Result<serde_json::Value>, i32) {
    crate::tty::status("deckhand is working...");

    match command {
        crate::Commands::Deploy(args) => dispatch!(args, global, deploy),
        crate::Commands::Backup(args) => dispatch!(args, global, backup),
        crate::Commands::Build(args) => dispatch!(args, global, build),
        crate::Commands::Validate(args) => dispatch!(args, global, validate),
        crate::Commands::Report(args) => dispatch!(args, global, report),
        crate::Commands::Publish(args) => dispatch!(args, global, publish),
        crate::Commands::Config(args) => dispatch!(args, global, config),
        crate::Commands::Init(args) => dispatch!(args, global, init),
    }
}
