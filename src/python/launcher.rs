use crate::config::ResolvedSettings;
use crate::core::error::{LaunchError, Result};
use crate::core::{resolve_path, ProcessExecutor};
use crate::python::{ActivationState, PipenvManager};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Search path variable the Python loader reads to resolve the tool module
/// straight out of the repository, without installation.
pub const MODULE_PATH_VAR: &str = "PYTHONPATH";

/// One fully specified child invocation. Built before anything is spawned so
/// the two paths can be inspected without starting a process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationPlan {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

pub struct ModuleLauncher {
    project_dir: PathBuf,
    settings: ResolvedSettings,
}

impl ModuleLauncher {
    pub fn new(project_dir: PathBuf, settings: ResolvedSettings) -> Self {
        Self {
            project_dir,
            settings,
        }
    }

    /// Establish the module search path. It must point at an existing
    /// directory before any child starts; failure here means no stage line
    /// has been printed and no process has been spawned.
    fn resolve_source_root(&self) -> Result<PathBuf> {
        let path = resolve_path(&self.project_dir, &self.settings.source_root);

        if !path.is_dir() {
            return Err(LaunchError::SearchPath(format!(
                "source root {} does not exist or is not a directory",
                path.display()
            )));
        }

        Ok(path)
    }

    fn child_env(&self, source_root: &Path) -> Vec<(String, String)> {
        let mut env = vec![(
            MODULE_PATH_VAR.to_string(),
            source_root.display().to_string(),
        )];
        env.extend(self.settings.extra_env.iter().cloned());
        env
    }

    /// Invocation for a process already inside the environment: run the
    /// interpreter itself with `-m <module>`.
    pub fn direct_plan(&self, source_root: &Path, args: &[String]) -> InvocationPlan {
        let mut plan_args = vec!["-m".to_string(), self.settings.module.clone()];
        plan_args.extend(args.iter().cloned());

        InvocationPlan {
            program: self.settings.interpreter.clone(),
            args: plan_args,
            env: self.child_env(source_root),
        }
    }

    /// Invocation for a process outside the environment: hand the same
    /// interpreter command to pipenv, which activates the environment first.
    pub fn delegated_plan(&self, source_root: &Path, args: &[String]) -> InvocationPlan {
        let mut plan_args = vec![
            "run".to_string(),
            self.settings.interpreter.clone(),
            "-m".to_string(),
            self.settings.module.clone(),
        ];
        plan_args.extend(args.iter().cloned());

        InvocationPlan {
            program: self.settings.pipenv_command.clone(),
            args: plan_args,
            env: self.child_env(source_root),
        }
    }

    /// Start exactly one child on the path chosen by `state`, block until it
    /// terminates, and return its exit code. stdio is inherited throughout.
    pub async fn launch(&self, state: ActivationState, args: &[String]) -> Result<i32> {
        let source_root = self.resolve_source_root()?;

        let plan = if state.is_active() {
            println!(
                "{} Pipenv environment already active; running {} directly",
                "ℹ".blue().bold(),
                self.settings.module.cyan()
            );
            self.direct_plan(&source_root, args)
        } else {
            println!(
                "{} Pipenv environment not active; launching {} through {}",
                "⚙".blue().bold(),
                self.settings.module.cyan(),
                "pipenv run".yellow()
            );
            let pipenv = PipenvManager::new(
                self.settings.pipenv_command.clone(),
                self.project_dir.clone(),
            );
            pipenv.check_installed()?;
            self.delegated_plan(&source_root, args)
        };

        tracing::debug!("spawning {} with args {:?}", plan.program, plan.args);

        ProcessExecutor::run_interactive(&plan.program, &plan.args, &plan.env, &self.project_dir)
            .await
    }
}
