//! Identity gateway trait.
//!
//! Defines the interface the session store refreshes from.

use crate::error::Result;
use crate::identity::Identity;
use async_trait::async_trait;

/// An abstract gateway to the external identity endpoint.
///
/// This trait decouples the session store from the transport (HTTP in
/// production, scripted responses in tests). Implementations perform exactly
/// one outbound request per call; the store adds no retries or backoff.
///
/// # Error contract
///
/// - `Err(QuorumError::Unauthorized)`: the endpoint explicitly denied the
///   request (401/403 class). The caller treats this as "logged out".
/// - `Err(QuorumError::Transport { .. })`: the endpoint was unreachable,
///   returned an unexpected status, or its body could not be decoded. The
///   caller must not treat this as a logout.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Fetches the current identity from the external endpoint.
    ///
    /// # Returns
    ///
    /// - `Ok(Identity)`: the endpoint reported an authenticated user
    /// - `Err(_)`: denial or transport failure, per the error contract above
    async fn fetch_identity(&self) -> Result<Identity>;
}
