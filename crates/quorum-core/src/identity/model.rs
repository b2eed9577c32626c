//! Identity domain model.
//!
//! Represents the authenticated user as reported by the backend's
//! `/me` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user's identity.
///
/// Field names are camelCase on the wire (`displayName`, `avatarUrl`,
/// `createdAt`) to match the backend's JSON contract. `avatar_url` and
/// `created_at` are optional; the backend omits them for accounts that
/// never set them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Stable user ID assigned by the backend
    pub id: String,
    /// User-visible display name
    pub display_name: String,
    /// URL of the user's avatar image, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Account creation time, if the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Creates an identity with only the required fields set.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar_url: None,
            created_at: None,
        }
    }
}
