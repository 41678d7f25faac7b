use crate::config::{LaunchConfig, ProjectConfigManager, DEFAULT_PROJECT_NAME};
use crate::core::error::Result;
use colored::Colorize;

pub async fn execute(
    name: Option<String>,
    module: Option<String>,
    source_root: Option<String>,
    python: Option<String>,
) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let manager = ProjectConfigManager::new(&current_dir);

    let mut config = LaunchConfig::default();

    config.project.name = name.unwrap_or_else(|| {
        current_dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_PROJECT_NAME)
            .to_string()
    });

    if let Some(module) = module {
        config.tool.module = module;
    }
    if let Some(source_root) = source_root {
        config.tool.source_root = source_root;
    }
    config.python.interpreter = python;

    manager.create(config).await?;

    println!(
        "{} Created {}",
        "✓".green().bold(),
        manager.config_path().display().to_string().yellow()
    );
    println!(
        "  Run {} to check the environment",
        "mtms-launch doctor".cyan()
    );

    Ok(())
}
