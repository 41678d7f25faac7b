use crate::config::schema::LaunchConfig;
use crate::config::validate_launch_config;
use crate::core::error::{LaunchError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

const PROJECT_CONFIG_FILE: &str = "mtms.toml";

pub struct ProjectConfigManager {
    project_dir: PathBuf,
    config_path: PathBuf,
}

impl ProjectConfigManager {
    pub fn new(project_dir: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            config_path: project_dir.join(PROJECT_CONFIG_FILE),
        }
    }

    pub fn from_current_dir() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let project_dir = Self::find_project_root(&current_dir).unwrap_or(current_dir);
        Ok(Self::new(&project_dir))
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Load mtms.toml, or the built-in defaults when no file exists.
    ///
    /// A bare checkout has no config file; the launcher still has to work
    /// there, so absence is not an error.
    pub async fn load(&self) -> Result<LaunchConfig> {
        if !self.exists() {
            tracing::debug!(
                "no {} under {}, using defaults",
                PROJECT_CONFIG_FILE,
                self.project_dir.display()
            );
            return Ok(LaunchConfig::default());
        }

        tracing::debug!("loading {}", self.config_path.display());
        let content = fs::read_to_string(&self.config_path).await?;
        let config: LaunchConfig = toml::from_str(&content)?;
        validate_launch_config(&config)?;
        Ok(config)
    }

    pub async fn save(&self, config: &LaunchConfig) -> Result<()> {
        validate_launch_config(config)?;
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await?;
        Ok(())
    }

    pub async fn create(&self, config: LaunchConfig) -> Result<()> {
        if self.exists() {
            return Err(LaunchError::Config(
                "Project already initialized. mtms.toml exists.".to_string(),
            ));
        }

        self.save(&config).await?;
        Ok(())
    }

    pub fn find_project_root(start_dir: &Path) -> Option<PathBuf> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(PROJECT_CONFIG_FILE);
            if config_path.exists() {
                return Some(current.to_path_buf());
            }

            current = current.parent()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = ProjectConfigManager::new(dir.path());

        let config = mgr.load().await.unwrap();
        assert_eq!(config.tool.module, "mtms_cli");
        assert_eq!(config.tool.source_root, "src");
    }

    #[tokio::test]
    async fn load_rejects_invalid_module() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = ProjectConfigManager::new(dir.path());

        let toml = r#"
[tool]
module = "src/mtms_cli"
"#;

        tokio::fs::write(mgr.config_path(), toml).await.unwrap();

        let err = mgr.load().await.unwrap_err();
        assert!(err.to_string().contains("tool.module"));
    }

    #[tokio::test]
    async fn load_reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = ProjectConfigManager::new(dir.path());

        let toml = r#"
[project]
name = "mtms"

[python]
interpreter = "python3.11"

[pipenv]
command = "/usr/local/bin/pipenv"
"#;

        tokio::fs::write(mgr.config_path(), toml).await.unwrap();

        let config = mgr.load().await.unwrap();
        assert_eq!(config.python.interpreter.as_deref(), Some("python3.11"));
        assert_eq!(
            config.pipenv.command.as_deref(),
            Some("/usr/local/bin/pipenv")
        );
    }

    #[tokio::test]
    async fn create_refuses_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = ProjectConfigManager::new(dir.path());

        mgr.create(LaunchConfig::default()).await.unwrap();

        let err = mgr.create(LaunchConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("already initialized"));
    }

    #[tokio::test]
    async fn project_root_found_from_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = ProjectConfigManager::new(dir.path());
        mgr.create(LaunchConfig::default()).await.unwrap();

        let nested = dir.path().join("src").join("deep");
        tokio::fs::create_dir_all(&nested).await.unwrap();

        let root = ProjectConfigManager::find_project_root(&nested).unwrap();
        assert_eq!(root, dir.path());
    }
}
