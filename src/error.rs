//! Error types for the automaton engines.

use thiserror::Error;

/// Errors reported before an engine performs any computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// Input dimensions do not agree with each other.
    #[error("shape mismatch in {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Which input was malformed.
        what: &'static str,
        /// Size required by the rest of the input.
        expected: usize,
        /// Size actually supplied.
        found: usize,
    },

    /// A negative number of steps was requested.
    #[error("invalid step count: {0}")]
    InvalidStepCount(i64),

    /// A rule string could not be parsed.
    #[error("invalid rule string: {0}")]
    InvalidRule(String),
}

impl AutomatonError {
    /// Status code returned across the C ABI. 0 is success, 1 is a null pointer.
    pub fn status_code(&self) -> i32 {
        match self {
            AutomatonError::ShapeMismatch { .. } => 2,
            AutomatonError::InvalidStepCount(_) => 3,
            AutomatonError::InvalidRule(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, AutomatonError>;
