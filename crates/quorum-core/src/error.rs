//! Error types for the Quorum client SDK.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Quorum client crates.
///
/// This provides typed, structured error variants so callers can branch on
/// the class of failure (denied vs. transient) without string matching.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum QuorumError {
    /// The backend explicitly denied the request (401/403 class).
    #[error("Unauthorized: the backend denied the request")]
    Unauthorized,

    /// Network failure, unexpected status, or undecodable payload.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The backend accepted the request but rejected its content
    /// (an `{ "error": ... }` response envelope).
    #[error("Rejected by backend: {message}")]
    Rejected { message: String },
}

impl QuorumError {
    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a Rejected error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Check if this is an Unauthorized error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is a Rejected error
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// A type alias for `Result<T, QuorumError>`.
pub type Result<T> = std::result::Result<T, QuorumError>;
