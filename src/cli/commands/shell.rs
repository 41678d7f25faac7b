use crate::config::{resolve_settings, GlobalConfigManager, ProjectConfigManager};
use crate::core::error::Result;
use crate::python::PipenvManager;

pub async fn execute() -> Result<()> {
    let manager = ProjectConfigManager::from_current_dir()?;
    let project = manager.load().await?;
    let global = GlobalConfigManager::new()?.load().await?;
    let settings = resolve_settings(&project, &global);

    let pipenv = PipenvManager::new(settings.pipenv_command, manager.project_dir().to_path_buf());
    let exit_code = pipenv.spawn_shell().await?;

    std::process::exit(exit_code);
}
