use crate::config::{resolve_settings, GlobalConfigManager, LaunchConfig, ProjectConfigManager};
use crate::core::{error::Result, resolve_path, ProcessExecutor};
use crate::python::PipenvManager;
use colored::Colorize;
use std::path::Path;

pub async fn execute() -> Result<()> {
    println!("{}", "Running environment checks...".bold());
    println!();

    let mut all_ok = true;

    let manager = ProjectConfigManager::from_current_dir()?;

    // Check project config
    print!("Checking config... ");
    let project = match manager.load().await {
        Ok(config) => {
            if manager.exists() {
                println!(
                    "{} ({})",
                    "✓".green(),
                    manager.config_path().display().to_string().yellow()
                );
            } else {
                println!("{}", "○ No mtms.toml, using defaults".yellow());
            }
            config
        }
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            all_ok = false;
            LaunchConfig::default()
        }
    };

    let global = GlobalConfigManager::new()?.load().await?;
    let settings = resolve_settings(&project, &global);

    // Check interpreter
    print!("Checking {}... ", settings.interpreter);
    if ProcessExecutor::check_command_exists(&settings.interpreter) {
        let version =
            ProcessExecutor::execute_with_output(&settings.interpreter, &["--version"]).await;
        match version {
            Ok(v) => println!("{} ({})", "✓".green(), v.trim().yellow()),
            Err(_) => println!("{}", "✓".green()),
        }
    } else {
        println!("{}", "✗ Not found".red());
        all_ok = false;
    }

    // Check pipenv
    print!("Checking {}... ", settings.pipenv_command);
    let pipenv = PipenvManager::new(
        settings.pipenv_command.clone(),
        manager.project_dir().to_path_buf(),
    );
    match pipenv.check_installed() {
        Ok(_) => match pipenv.version().await {
            Ok(v) => println!("{} ({})", "✓".green(), v.trim().yellow()),
            Err(_) => println!("{}", "✓".green()),
        },
        Err(_) => {
            println!("{}", "✗ Not found".red());
            println!("  Install from: https://pipenv.pypa.io");
            all_ok = false;
        }
    }

    // Check source root and tool module
    print!("Checking source root... ");
    let source_root = resolve_path(manager.project_dir(), &settings.source_root);
    if source_root.is_dir() {
        println!(
            "{} ({})",
            "✓".green(),
            source_root.display().to_string().yellow()
        );

        print!("Checking module {}... ", settings.module.cyan());
        if module_resolvable(&source_root, &settings.module) {
            println!("{}", "✓".green());
        } else {
            println!("{}", "○ Not found under source root".yellow());
        }
    } else {
        println!("{}", "✗ Not found".red());
        all_ok = false;
    }

    println!();
    if all_ok {
        println!("{}", "All checks passed!".green().bold());
    } else {
        println!(
            "{}",
            "Some checks failed. Please fix the issues above."
                .yellow()
                .bold()
        );
    }

    Ok(())
}

/// A module is resolvable if its top-level segment exists under the source
/// root as a single-file module or a package.
fn module_resolvable(source_root: &Path, module: &str) -> bool {
    let top = module.split('.').next().unwrap_or(module);

    source_root.join(format!("{}.py", top)).is_file()
        || source_root.join(top).join("__init__.py").is_file()
}
