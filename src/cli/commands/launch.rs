use crate::config::{resolve_settings, GlobalConfigManager, ProjectConfigManager};
use crate::core::error::Result;
use crate::python::{ActivationState, ModuleLauncher};

pub async fn execute(args: Vec<String>) -> Result<()> {
    let manager = ProjectConfigManager::from_current_dir()?;
    let project = manager.load().await?;
    let global = GlobalConfigManager::new()?.load().await?;
    let settings = resolve_settings(&project, &global);

    // The activation signal is read exactly once, before any invocation
    // decision, and passed down as a value.
    let state = ActivationState::from_env();

    let launcher = ModuleLauncher::new(manager.project_dir().to_path_buf(), settings);
    let exit_code = launcher.launch(state, &args).await?;

    std::process::exit(exit_code);
}
