use crate::config::schema::LaunchConfig;
use crate::core::error::{LaunchError, Result};

pub fn validate_tool_module(module: &str) -> Result<()> {
    if module.is_empty() {
        return Err(LaunchError::Config(
            "tool.module cannot be empty".to_string(),
        ));
    }

    if module.chars().any(|c| c == '/' || c == '\\') {
        return Err(LaunchError::Config(
            "tool.module must be a module name, not a path".to_string(),
        ));
    }

    for segment in module.split('.') {
        let mut chars = segment.chars();
        let valid = match chars.next() {
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => false,
        };

        if !valid {
            return Err(LaunchError::Config(format!(
                "tool.module \"{}\" is not a valid dotted module name",
                module
            )));
        }
    }

    Ok(())
}

pub fn validate_launch_config(config: &LaunchConfig) -> Result<()> {
    if config.project.name.trim().is_empty() {
        return Err(LaunchError::Config(
            "project.name cannot be empty".to_string(),
        ));
    }

    validate_tool_module(&config.tool.module)?;

    if config.tool.source_root.trim().is_empty() {
        return Err(LaunchError::Config(
            "tool.source_root cannot be empty".to_string(),
        ));
    }

    if let Some(interpreter) = config.python.interpreter.as_deref() {
        if interpreter.trim().is_empty() {
            return Err(LaunchError::Config(
                "python.interpreter cannot be empty".to_string(),
            ));
        }
    }

    if let Some(command) = config.pipenv.command.as_deref() {
        if command.trim().is_empty() {
            return Err(LaunchError::Config(
                "pipenv.command cannot be empty".to_string(),
            ));
        }
    }

    for key in config.environment.keys() {
        if key.trim().is_empty() || key.contains('=') {
            return Err(LaunchError::Config(format!(
                "environment key \"{}\" is not a valid variable name",
                key
            )));
        }
    }

    Ok(())
}
