use std::fmt;

/// Errors surfaced while building a simulation.
///
/// `step` itself never fails; everything here is a construction-time problem.
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// A parameter is out of its allowed range (count, radius, damping, ...)
    InvalidConfiguration(String),
    /// Config JSON could not be parsed
    Parse(String),
}

impl SimulationError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SimulationError::InvalidConfiguration(msg.into())
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            SimulationError::Parse(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<serde_json::Error> for SimulationError {
    fn from(e: serde_json::Error) -> Self {
        SimulationError::Parse(e.to_string())
    }
}
