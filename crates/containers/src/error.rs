use thiserror::Error;

/// Signalled when a payload is read from the branch of a container that does
/// not hold one. Carries the attempted operation and the actual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("called `{operation}` on `{state}`")]
pub struct ValueAccessError {
    pub operation: &'static str,
    pub state: &'static str,
}

impl ValueAccessError {
    pub fn new(operation: &'static str, state: &'static str) -> Self {
        Self { operation, state }
    }
}
