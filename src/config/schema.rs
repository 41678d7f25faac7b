use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_PROJECT_NAME: &str = "mtms";
pub const DEFAULT_TOOL_MODULE: &str = "mtms_cli";
pub const DEFAULT_SOURCE_ROOT: &str = "src";
pub const DEFAULT_INTERPRETER: &str = "python3";
pub const DEFAULT_PIPENV_COMMAND: &str = "pipenv";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LaunchConfig {
    #[serde(default)]
    pub project: ProjectMeta,
    #[serde(default)]
    pub python: PythonConfig,
    #[serde(default)]
    pub tool: ToolConfig,
    #[serde(default)]
    pub pipenv: PipenvConfig,
    #[serde(default)]
    pub environment: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectMeta {
    #[serde(default = "default_project_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Default for ProjectMeta {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PythonConfig {
    #[serde(default)]
    pub interpreter: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolConfig {
    /// Importable module name of the tool, e.g. "mtms_cli".
    #[serde(default = "default_tool_module")]
    pub module: String,

    /// Directory holding the module, installed as the child's PYTHONPATH.
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            module: default_tool_module(),
            source_root: default_source_root(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PipenvConfig {
    #[serde(default)]
    pub command: Option<String>,
}

/// User-level defaults, overridden by per-project values in mtms.toml.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub python: PythonConfig,
    #[serde(default)]
    pub pipenv: PipenvConfig,
}

fn default_project_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

fn default_tool_module() -> String {
    DEFAULT_TOOL_MODULE.to_string()
}

fn default_source_root() -> String {
    DEFAULT_SOURCE_ROOT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: LaunchConfig = toml::from_str("").unwrap();

        assert_eq!(config.project.name, DEFAULT_PROJECT_NAME);
        assert_eq!(config.tool.module, DEFAULT_TOOL_MODULE);
        assert_eq!(config.tool.source_root, DEFAULT_SOURCE_ROOT);
        assert_eq!(config.python.interpreter, None);
        assert_eq!(config.pipenv.command, None);
        assert!(config.environment.is_empty());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let toml = r#"
[tool]
module = "mtms_cli.app"

[environment]
MTMS_LOG_LEVEL = "debug"
"#;

        let config: LaunchConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.tool.module, "mtms_cli.app");
        assert_eq!(config.tool.source_root, DEFAULT_SOURCE_ROOT);
        assert_eq!(
            config.environment.get("MTMS_LOG_LEVEL").map(String::as_str),
            Some("debug")
        );
    }
}
