/// Variable pipenv exports inside an activated environment.
pub const ACTIVATION_VAR: &str = "PIPENV_ACTIVE";

/// The one value that counts as "active". Anything else, "0" and "true"
/// included, does not.
const ACTIVATION_SENTINEL: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    Active,
    Inactive,
}

impl ActivationState {
    pub fn from_signal(signal: Option<&str>) -> Self {
        if signal == Some(ACTIVATION_SENTINEL) {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// Read the activation signal from the process environment.
    ///
    /// Called once per run, before any invocation decision; the result is
    /// handed down as a plain value and never re-read.
    pub fn from_env() -> Self {
        Self::from_signal(std::env::var(ACTIVATION_VAR).ok().as_deref())
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
