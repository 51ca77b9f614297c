//! Engine error types.
//!
//! The engine performs no I/O and accepts only well-formed in-memory input,
//! so every variant here is a precondition or data-completeness failure,
//! not a runtime-recoverable condition. Profile and life-index computation
//! deliberately degrade instead of failing (zero-filled axes, lower ratio);
//! the forces analyzer and the static lookup tables fail hard. That
//! asymmetry is inherited behavior and is preserved on purpose.

use thiserror::Error;

/// Errors that can occur during report computation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A phase id outside the static 1..=10 domain reached a table lookup.
    #[error("Unknown phase id {id}: static tables cover ids 1..=10")]
    UnknownPhase {
        /// The offending phase id.
        id: u8,
    },

    /// Too few phase results for the requested analysis.
    #[error("Insufficient phase results: need at least {required}, got {actual}")]
    InsufficientPhases {
        /// Minimum number of results the operation needs.
        required: usize,
        /// Number of results actually supplied.
        actual: usize,
    },

    /// An empty result set reached an operation that cannot degrade.
    #[error("Empty input provided for report computation")]
    EmptyInput,

    /// A phase was evaluated with the wrong number of answers.
    #[error("Phase {phase_id} expects {expected} answers, got {actual}")]
    InvalidAnswerCount {
        /// The phase being evaluated.
        phase_id: u8,
        /// Answers the phase defines.
        expected: usize,
        /// Answers actually supplied.
        actual: usize,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::SerializationError(err.to_string())
    }
}

impl EngineError {
    /// Create an `UnknownPhase` error.
    pub fn unknown_phase(id: u8) -> Self {
        EngineError::UnknownPhase { id }
    }

    /// Create an `InsufficientPhases` error.
    pub fn insufficient(required: usize, actual: usize) -> Self {
        EngineError::InsufficientPhases { required, actual }
    }

    /// True for caller-side precondition violations (as opposed to
    /// serialization plumbing).
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            EngineError::UnknownPhase { .. }
                | EngineError::InsufficientPhases { .. }
                | EngineError::EmptyInput
                | EngineError::InvalidAnswerCount { .. }
        )
    }
}
