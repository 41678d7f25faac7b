use crate::core::error::{LaunchError, Result};
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command;

pub struct ProcessExecutor;

impl ProcessExecutor {
    pub async fn execute(cmd: &str, args: &[&str], env: Option<&[(&str, &str)]>) -> Result<Output> {
        let mut command = Command::new(cmd);
        command.args(args);

        if let Some(env_vars) = env {
            for (key, value) in env_vars {
                command.env(key, value);
            }
        }

        let output = command
            .output()
            .await
            .map_err(|e| LaunchError::CommandFailed(format!("{}: {}", cmd, e)))?;

        Ok(output)
    }

    pub async fn execute_with_output(cmd: &str, args: &[&str]) -> Result<String> {
        let output = Self::execute(cmd, args, None).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LaunchError::CommandFailed(format!(
                "{} failed: {}",
                cmd, stderr
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run a command with full stdio passthrough and report its exit code.
    ///
    /// A child killed by a signal carries no code; that maps to 1.
    pub async fn run_interactive(
        cmd: &str,
        args: &[String],
        env: &[(String, String)],
        current_dir: &Path,
    ) -> Result<i32> {
        let mut command = Command::new(cmd);
        command
            .args(args)
            .current_dir(current_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        for (key, value) in env {
            command.env(key, value);
        }

        let status = command
            .status()
            .await
            .map_err(|e| LaunchError::CommandFailed(format!("Failed to execute {}: {}", cmd, e)))?;

        Ok(status.code().unwrap_or(1))
    }

    pub fn check_command_exists(cmd: &str) -> bool {
        // Configured commands may be explicit paths rather than PATH lookups.
        if cmd.contains(std::path::MAIN_SEPARATOR) {
            return Path::new(cmd).is_file();
        }

        std::process::Command::new("which")
            .arg(cmd)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}
