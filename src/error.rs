use std::fmt;

use serde::Serialize;

/// Structured failure for a single `compile` call. Compilation is
/// deterministic and pure, so nothing here is retryable — a failed call
/// produces no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "detail")]
pub enum CompileError {
    /// Loop/macro nesting went deeper than the configured limit. This is how
    /// a macro that replays itself surfaces, instead of exhausting the call
    /// stack.
    RecursionLimitExceeded { limit: usize },
    /// The program emitted more points than the configured budget allows.
    PointLimitExceeded { limit: usize },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::RecursionLimitExceeded { limit } => {
                write!(f, "loop/macro nesting exceeded {limit} levels")
            }
            CompileError::PointLimitExceeded { limit } => {
                write!(f, "program emitted more than {limit} points")
            }
        }
    }
}

impl std::error::Error for CompileError {}
