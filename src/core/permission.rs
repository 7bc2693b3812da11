// Outcome of asking the platform for motion-sensor access.
use thiserror::Error;

/// How access was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granted {
    /// The user accepted a consent prompt.
    Explicit,
    /// The platform has no consent API; sensors are simply available.
    Implicit,
}

/// Non-fatal reasons the motion channel stays off. The pointer fallback keeps
/// working in either case.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PermissionError {
    #[error("motion permission denied (answer: {0:?})")]
    Denied(String),
    #[error("motion permission request failed: {0}")]
    RequestFailed(String),
}

pub type PermissionResult = Result<Granted, PermissionError>;

/// Interpret the string a consent prompt resolves with.
pub fn interpret_answer(answer: &str) -> PermissionResult {
    match answer {
        "granted" => Ok(Granted::Explicit),
        other => Err(PermissionError::Denied(other.to_string())),
    }
}
