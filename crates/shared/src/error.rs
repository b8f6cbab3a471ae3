use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure taxonomy for catalog retrieval. The in-memory access layer never
/// produces these, but every consumer must treat retrieval as fallible so a
/// network-backed implementation can slot in without changing callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum RetrievalError {
    #[error("retrieval failed: {0}")]
    Failed(String),
    /// Reserved for implementations with a real transport underneath.
    #[error("transient failure: {0}")]
    Transient(String),
}

impl RetrievalError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Failed(message) | Self::Transient(message) => message,
        }
    }
}
