use serde::Serialize;
use std::path::PathBuf;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::utils::command::{self, CapturedOutput};

/// The opaque build collaborator.
///
/// The pipeline only cares that a build was attempted and whether it
/// succeeded; bundling, minification, and asset copying are someone
/// else's problem.
pub trait BuildRunner {
    fn run(&self) -> Result<BuildOutput>;
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOutput {
    pub build_command: String,
    pub exit_code: i32,
    #[serde(flatten)]
    pub output: CapturedOutput,
    pub success: bool,
}

/// Production build runner: shells out to the configured build command
/// in the source directory.
pub struct CommandBuildRunner {
    command: String,
    working_dir: PathBuf,
}

impl CommandBuildRunner {
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            command: config.build_command.clone(),
            working_dir: config.source_dir_path(),
        }
    }
}

impl BuildRunner for CommandBuildRunner {
    fn run(&self) -> Result<BuildOutput> {
        crate::log_status!("build", "Running: {}", self.command);

        let output = command::execute_shell_in_dir(&self.command, Some(&self.working_dir));

        Ok(BuildOutput {
            build_command: self.command.clone(),
            exit_code: output.exit_code,
            output: CapturedOutput::new(output.stdout, output.stderr),
            success: output.success,
        })
    }
}

/// Format a build failure message with context from stderr/stdout.
/// Only includes universal POSIX exit code hints.
pub fn format_build_error(output: &BuildOutput) -> String {
    // Get useful output (prefer stderr, fall back to stdout)
    let output_text = if output.output.stderr.trim().is_empty() {
        &output.output.stdout
    } else {
        &output.output.stderr
    };

    // Get last 15 lines for context
    let tail: Vec<&str> = output_text.lines().rev().take(15).collect();
    let output_tail: String = tail.into_iter().rev().collect::<Vec<_>>().join("\n");

    let hint = match output.exit_code {
        127 => "\nHint: Command not found. Check that the build command and its dependencies are installed and in PATH.",
        126 => "\nHint: Permission denied. Check file permissions on the build script.",
        _ => "",
    };

    let mut msg = format!(
        "Build failed (exit code {}).\n  Command: {}",
        output.exit_code, output.build_command
    );

    if !output_tail.is_empty() {
        msg.push_str("\n\n--- Build output (last 15 lines) ---\n");
        msg.push_str(&output_tail);
        msg.push_str("\n--- End of output ---");
    }

    if !hint.is_empty() {
        msg.push_str(hint);
    }

    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner_for(command: &str) -> CommandBuildRunner {
        CommandBuildRunner {
            command: command.to_string(),
            working_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn successful_command_reports_success() {
        let output = runner_for("printf built").run().unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.output.stdout, "built");
    }

    #[test]
    fn failing_command_is_captured_not_propagated() {
        let output = runner_for("echo broken >&2; exit 2").run().unwrap();
        assert!(!output.success);
        assert_eq!(output.exit_code, 2);
        assert!(output.output.stderr.contains("broken"));
    }

    #[test]
    fn build_error_includes_command_and_tail() {
        let output = BuildOutput {
            build_command: "node build.js".to_string(),
            exit_code: 1,
            output: CapturedOutput::new(String::new(), "line one\nline two".to_string()),
            success: false,
        };

        let msg = format_build_error(&output);
        assert!(msg.contains("exit code 1"));
        assert!(msg.contains("node build.js"));
        assert!(msg.contains("line two"));
    }

    #[test]
    fn exit_127_adds_path_hint() {
        let output = BuildOutput {
            build_command: "no-such-tool".to_string(),
            exit_code: 127,
            output: CapturedOutput::new(String::new(), String::new()),
            success: false,
        };

        assert!(format_build_error(&output).contains("PATH"));
    }
}
