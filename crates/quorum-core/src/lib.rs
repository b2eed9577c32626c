pub mod error;
pub mod identity;
pub mod session;

// Re-export common error type
pub use error::QuorumError;
