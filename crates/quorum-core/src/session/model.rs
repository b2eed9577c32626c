//! Session domain model.

use crate::identity::Identity;

/// Coarse session state, derived from [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No refresh attempt has completed yet
    Loading,
    /// The last completed attempt (or an explicit override) produced an identity
    Authenticated,
    /// The last completed attempt found no identity, or the session was cleared
    Anonymous,
}

/// The current session.
///
/// The identity is owned by the `Authenticated` variant, so the status can
/// never disagree with identity presence: there is no way to hold an identity
/// while anonymous, or to be authenticated without one.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    /// Initial state, before the first refresh completes
    Loading,
    /// Logged in as the contained identity
    Authenticated(Identity),
    /// Logged out (or never logged in)
    Anonymous,
}

impl Session {
    /// Returns the coarse status of this session.
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Loading => SessionStatus::Loading,
            Self::Authenticated(_) => SessionStatus::Authenticated,
            Self::Anonymous => SessionStatus::Anonymous,
        }
    }

    /// Returns the identity, if authenticated.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// Check if no refresh attempt has completed yet
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the session holds an identity
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Check if the session is logged out
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tracks_variant() {
        assert_eq!(Session::Loading.status(), SessionStatus::Loading);
        assert_eq!(Session::Anonymous.status(), SessionStatus::Anonymous);

        let session = Session::Authenticated(Identity::new("u1", "Kiri"));
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.identity().map(|i| i.id.as_str()), Some("u1"));
    }

    #[test]
    fn test_default_is_loading() {
        assert!(Session::default().is_loading());
        assert!(Session::default().identity().is_none());
    }
}
