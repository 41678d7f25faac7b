use crate::core::error::{LaunchError, Result};
use crate::core::ProcessExecutor;
use std::path::PathBuf;

/// The environment manager. Its whole contract here is: given a command to
/// run, activate the environment, run it, and exit with that run's status.
pub struct PipenvManager {
    command: String,
    project_dir: PathBuf,
}

impl PipenvManager {
    pub fn new(command: String, project_dir: PathBuf) -> Self {
        Self {
            command,
            project_dir,
        }
    }

    pub fn check_installed(&self) -> Result<()> {
        if !ProcessExecutor::check_command_exists(&self.command) {
            return Err(LaunchError::PythonEnv(format!(
                "{} is not installed. Please install it first: https://pipenv.pypa.io",
                self.command
            )));
        }
        Ok(())
    }

    pub async fn version(&self) -> Result<String> {
        ProcessExecutor::execute_with_output(&self.command, &["--version"]).await
    }

    /// Spawn an interactive pipenv shell for the project.
    pub async fn spawn_shell(&self) -> Result<i32> {
        self.check_installed()?;

        ProcessExecutor::run_interactive(
            &self.command,
            &["shell".to_string()],
            &[],
            &self.project_dir,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_manager_is_reported() {
        let mgr = PipenvManager::new(
            "definitely-not-a-real-pipenv".to_string(),
            PathBuf::from("/tmp"),
        );

        let err = mgr.check_installed().unwrap_err();
        assert!(matches!(err, LaunchError::PythonEnv(_)));
        assert!(err.to_string().contains("not installed"));
    }
}
