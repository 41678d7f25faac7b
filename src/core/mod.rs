pub mod error;
pub mod path;
pub mod process;

pub use error::{LaunchError, Result};
pub use path::resolve_path;
pub use process::ProcessExecutor;
