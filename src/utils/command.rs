//! Command execution primitives with consistent error handling.

use serde::Serialize;
use std::path::Path;
use std::process::Command;

/// Captured stdout/stderr from a completed command.
#[derive(Debug, Clone, Serialize)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn new(stdout: String, stderr: String) -> Self {
        Self { stdout, stderr }
    }
}

/// Full result of a shell command execution.
#[derive(Debug, Clone)]
pub struct ShellOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Run a shell command string via `sh -c`, optionally in a working directory.
///
/// Never returns an error: a command that could not be spawned is reported
/// as a failed execution (exit code 127, spawn error in stderr) so callers
/// handle one shape for every failure mode.
pub fn execute_shell_in_dir(command: &str, dir: Option<&Path>) -> ShellOutput {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    match cmd.output() {
        Ok(output) => ShellOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(1),
            success: output.status.success(),
        },
        Err(e) => ShellOutput {
            stdout: String::new(),
            stderr: format!("Failed to run command: {}", e),
            exit_code: 127,
            success: false,
        },
    }
}

/// Extract error text from a shell execution.
///
/// Prefers stderr, falls back to stdout if stderr is empty.
pub fn error_text(output: &ShellOutput) -> String {
    if !output.stderr.trim().is_empty() {
        output.stderr.trim().to_string()
    } else {
        output.stdout.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_shell_captures_stdout() {
        let output = execute_shell_in_dir("printf hello", None);
        assert!(output.success);
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stdout, "hello");
    }

    #[test]
    fn execute_shell_reports_exit_code() {
        let output = execute_shell_in_dir("exit 3", None);
        assert!(!output.success);
        assert_eq!(output.exit_code, 3);
    }

    #[test]
    fn execute_shell_runs_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = execute_shell_in_dir("pwd", Some(dir.path()));
        assert!(output.success);
        assert!(output.stdout.trim().ends_with(
            dir.path().file_name().unwrap().to_str().unwrap()
        ));
    }

    #[test]
    fn error_text_prefers_stderr() {
        let output = ShellOutput {
            stdout: "out".to_string(),
            stderr: "err".to_string(),
            exit_code: 1,
            success: false,
        };
        assert_eq!(error_text(&output), "err");

        let output = ShellOutput {
            stdout: "out".to_string(),
            stderr: String::new(),
            exit_code: 1,
            success: false,
        };
        assert_eq!(error_text(&output), "out");
    }
}
