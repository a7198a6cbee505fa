//! Process execution for resolved commands.
//!
//! Children inherit the terminal's stdin/stdout/stderr; a non-zero exit is
//! reported as an error.

use crate::error::{LauncherError, Result};
use std::ffi::OsStr;
use std::path::Path;
use tokio::process::Command;

/// Interpreter used for run files
const ENV: &str = "/usr/bin/env";

/// Service for launching resolved commands
pub struct ProcessService;

impl ProcessService {
    /// Execute the run file through bash, forwarding `args` as `$*`
    pub async fn run_script(run_file: &Path, args: &[String]) -> Result<()> {
        let mut cmd = Command::new(ENV);
        cmd.arg("bash").arg(run_file).args(args);
        Self::wait(cmd, &format!("bash {}", run_file.display())).await
    }

    /// Execute a build argument vector
    pub async fn run_argv(argv: &[String]) -> Result<()> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| LauncherError::Process("empty command".to_string()))?;
        let mut cmd = Command::new(program);
        cmd.args(args);
        Self::wait(cmd, &argv.join(" ")).await
    }

    /// Open a file in the user's editor
    pub async fn edit(editor: &str, file: &Path) -> Result<()> {
        let mut cmd = Command::new(ENV);
        cmd.args([OsStr::new(editor), file.as_os_str()]);
        Self::wait(cmd, &format!("{} {}", editor, file.display())).await
    }

    async fn wait(mut cmd: Command, shown: &str) -> Result<()> {
        tracing::debug!("Running `{}`", shown);
        let status = cmd
            .status()
            .await
            .map_err(|e| LauncherError::Process(format!("failed to start `{}`: {}", shown, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(LauncherError::Process(format!(
                "`{}` exited with {}",
                shown, status
            )))
        }
    }
}
