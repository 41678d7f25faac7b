pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mtms-launch",
    version,
    about = "Bootstrap launcher for the mTMS command-line tool",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments passed through to the tool module
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the tool module (the default when no subcommand is given)
    Launch {
        /// Arguments passed through to the tool module
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Write a starter mtms.toml in the current directory
    Init {
        /// Project name (default: current directory name)
        #[arg(short, long)]
        name: Option<String>,

        /// Tool module to launch (default: mtms_cli)
        #[arg(short, long)]
        module: Option<String>,

        /// Source root installed as the module search path (default: src)
        #[arg(short, long)]
        source_root: Option<String>,

        /// Python interpreter to use (default: python3)
        #[arg(short, long)]
        python: Option<String>,
    },

    /// Check environment and dependencies
    Doctor,

    /// Enter the pipenv shell for the project
    Shell,
}

pub async fn run(cli: Cli) -> crate::core::error::Result<()> {
    match cli.command {
        None => commands::launch::execute(cli.args).await,

        Some(Commands::Launch { args }) => commands::launch::execute(args).await,

        Some(Commands::Init {
            name,
            module,
            source_root,
            python,
        }) => commands::init::execute(name, module, source_root, python).await,

        Some(Commands::Doctor) => commands::doctor::execute().await,

        Some(Commands::Shell) => commands::shell::execute().await,
    }
}
