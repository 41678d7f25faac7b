pub mod global;
pub mod project;
pub mod schema;
pub mod validation;

pub use global::GlobalConfigManager;
pub use project::ProjectConfigManager;
pub use schema::{
    GlobalConfig, LaunchConfig, DEFAULT_INTERPRETER, DEFAULT_PIPENV_COMMAND, DEFAULT_PROJECT_NAME,
    DEFAULT_SOURCE_ROOT, DEFAULT_TOOL_MODULE,
};
pub use validation::{validate_launch_config, validate_tool_module};

/// Effective settings for one run: project values over user-level global
/// values over built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub interpreter: String,
    pub pipenv_command: String,
    pub module: String,
    pub source_root: String,
    pub extra_env: Vec<(String, String)>,
}

pub fn resolve_settings(project: &LaunchConfig, global: &GlobalConfig) -> ResolvedSettings {
    let interpreter = project
        .python
        .interpreter
        .clone()
        .or_else(|| global.python.interpreter.clone())
        .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string());

    let pipenv_command = project
        .pipenv
        .command
        .clone()
        .or_else(|| global.pipenv.command.clone())
        .unwrap_or_else(|| DEFAULT_PIPENV_COMMAND.to_string());

    // Stable order so the child sees a deterministic environment.
    let mut extra_env: Vec<(String, String)> = project
        .environment
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    extra_env.sort();

    ResolvedSettings {
        interpreter,
        pipenv_command,
        module: project.tool.module.clone(),
        source_root: project.tool.source_root.clone(),
        extra_env,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_defaults_fill_unset_values() {
        let settings = resolve_settings(&LaunchConfig::default(), &GlobalConfig::default());

        assert_eq!(settings.interpreter, DEFAULT_INTERPRETER);
        assert_eq!(settings.pipenv_command, DEFAULT_PIPENV_COMMAND);
        assert_eq!(settings.module, DEFAULT_TOOL_MODULE);
        assert_eq!(settings.source_root, DEFAULT_SOURCE_ROOT);
        assert!(settings.extra_env.is_empty());
    }

    #[test]
    fn global_values_override_defaults() {
        let mut global = GlobalConfig::default();
        global.python.interpreter = Some("python3.12".to_string());
        global.pipenv.command = Some("/opt/pipenv".to_string());

        let settings = resolve_settings(&LaunchConfig::default(), &global);

        assert_eq!(settings.interpreter, "python3.12");
        assert_eq!(settings.pipenv_command, "/opt/pipenv");
    }

    #[test]
    fn project_values_override_global() {
        let mut global = GlobalConfig::default();
        global.python.interpreter = Some("python3.12".to_string());

        let mut project = LaunchConfig::default();
        project.python.interpreter = Some("python3.11".to_string());
        project
            .environment
            .insert("MTMS_LOG_LEVEL".to_string(), "debug".to_string());

        let settings = resolve_settings(&project, &global);

        assert_eq!(settings.interpreter, "python3.11");
        assert_eq!(
            settings.extra_env,
            vec![("MTMS_LOG_LEVEL".to_string(), "debug".to_string())]
        );
    }
}
