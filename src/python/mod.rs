pub mod activation;
pub mod launcher;
pub mod pipenv;

pub use activation::{ActivationState, ACTIVATION_VAR};
pub use launcher::{InvocationPlan, ModuleLauncher, MODULE_PATH_VAR};
pub use pipenv::PipenvManager;
