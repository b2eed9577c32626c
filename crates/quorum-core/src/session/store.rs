use super::gateway::IdentityGateway;
use super::model::{Session, SessionStatus};
use crate::identity::Identity;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

/// Owns the current session and knows how to refresh it from the identity
/// endpoint.
///
/// `SessionStore` is responsible for:
/// - Holding the tri-state session (`Loading` / `Authenticated` / `Anonymous`)
/// - Refreshing it from an injected [`IdentityGateway`]
/// - Applying explicit overrides after login and clears after logout
///
/// The store is constructed once at application start and passed by reference
/// (`Arc<SessionStore>`) to every consumer; it is not a global.
///
/// # Concurrency
///
/// Reads are plain snapshots. Writers replace the whole session value under
/// one lock, last write wins. Overlapping `refresh()` calls are permitted and
/// not deduplicated or ordered; whichever response is processed last
/// determines the final state.
pub struct SessionStore {
    /// Current session value; always replaced wholesale, never partially updated
    session: RwLock<Session>,
    /// Source of truth for refreshes
    gateway: Arc<dyn IdentityGateway>,
}

impl SessionStore {
    /// Creates a new store in the `Loading` state.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The gateway backend queried by [`refresh`](Self::refresh)
    pub fn new(gateway: Arc<dyn IdentityGateway>) -> Self {
        Self {
            session: RwLock::new(Session::Loading),
            gateway,
        }
    }

    /// Returns a snapshot of the current session. Never suspends.
    pub fn current(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the coarse status of the current session.
    pub fn status(&self) -> SessionStatus {
        self.current().status()
    }

    /// Refreshes the session from the identity endpoint.
    ///
    /// Performs exactly one gateway call and applies its outcome:
    ///
    /// - identity returned: session becomes `Authenticated` with that identity
    /// - explicit denial: session becomes `Anonymous`
    /// - transport failure: session is left unchanged, except that a store
    ///   still in `Loading` is forced to `Anonymous` so consumers get a
    ///   terminal state to act on
    ///
    /// Failures never escape this method; callers decide if and when to call
    /// again. Returns the post-refresh status.
    pub async fn refresh(&self) -> SessionStatus {
        match self.gateway.fetch_identity().await {
            Ok(identity) => {
                tracing::debug!(user_id = %identity.id, "session refreshed, authenticated");
                self.replace(Session::Authenticated(identity))
            }
            Err(err) if err.is_unauthorized() => {
                tracing::debug!("identity endpoint denied the request, session is anonymous");
                self.replace(Session::Anonymous)
            }
            Err(err) => {
                // Fail open: a transient outage is not a logout. From Loading
                // there is no last-known-good state to keep, so fall back to
                // Anonymous rather than leaving the caller waiting forever.
                let mut session = self.write();
                if session.is_loading() {
                    tracing::warn!(error = %err, "first session refresh failed, falling back to anonymous");
                    *session = Session::Anonymous;
                } else {
                    tracing::warn!(error = %err, "session refresh failed, keeping last known state");
                }
                session.status()
            }
        }
    }

    /// Forces the session to `Authenticated` with the given identity.
    ///
    /// Used immediately after a successful login or registration call, so the
    /// caller does not have to wait for a full refresh round trip.
    pub fn override_identity(&self, identity: Identity) {
        tracing::debug!(user_id = %identity.id, "session identity overridden");
        self.replace(Session::Authenticated(identity));
    }

    /// Forces the session to `Anonymous`.
    ///
    /// Terminal step of a logout flow; called unconditionally, whether or not
    /// the server-side logout call succeeded.
    pub fn clear(&self) {
        tracing::debug!("session cleared");
        self.replace(Session::Anonymous);
    }

    /// Replaces the whole session value and returns the new status.
    fn replace(&self, next: Session) -> SessionStatus {
        let mut session = self.write();
        *session = next;
        session.status()
    }

    // A poisoned lock only means a panic elsewhere while holding the guard;
    // the value itself is always a whole session, so recover it.
    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{QuorumError, Result};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Gateway that replays a scripted sequence of responses.
    struct ScriptedGateway {
        responses: Mutex<VecDeque<Result<Identity>>>,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<Result<Identity>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
            })
        }
    }

    #[async_trait]
    impl IdentityGateway for ScriptedGateway {
        async fn fetch_identity(&self) -> Result<Identity> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(QuorumError::transport("script exhausted")))
        }
    }

    fn store_with(responses: Vec<Result<Identity>>) -> SessionStore {
        SessionStore::new(ScriptedGateway::new(responses))
    }

    #[test]
    fn test_initial_state_is_loading() {
        let store = store_with(vec![]);
        assert_eq!(store.status(), SessionStatus::Loading);
        assert!(store.current().identity().is_none());
    }

    #[tokio::test]
    async fn test_refresh_success_authenticates() {
        let store = store_with(vec![Ok(Identity::new("u1", "Kiri"))]);

        let status = store.refresh().await;

        assert_eq!(status, SessionStatus::Authenticated);
        let session = store.current();
        assert_eq!(session.identity().map(|i| i.display_name.as_str()), Some("Kiri"));
    }

    #[tokio::test]
    async fn test_unauthorized_clears_any_prior_state() {
        let store = store_with(vec![
            Ok(Identity::new("u1", "Kiri")),
            Err(QuorumError::Unauthorized),
        ]);

        store.refresh().await;
        assert_eq!(store.status(), SessionStatus::Authenticated);

        let status = store.refresh().await;
        assert_eq!(status, SessionStatus::Anonymous);
        assert!(store.current().identity().is_none());
    }

    #[tokio::test]
    async fn test_transport_error_from_loading_falls_back_to_anonymous() {
        let store = store_with(vec![Err(QuorumError::transport("connection refused"))]);

        let status = store.refresh().await;

        assert_eq!(status, SessionStatus::Anonymous);
    }

    #[tokio::test]
    async fn test_transport_error_keeps_authenticated_identity() {
        let store = store_with(vec![
            Ok(Identity::new("u1", "Kiri")),
            Err(QuorumError::transport("connection reset")),
        ]);

        store.refresh().await;
        let status = store.refresh().await;

        assert_eq!(status, SessionStatus::Authenticated);
        assert_eq!(store.current().identity().map(|i| i.id.as_str()), Some("u1"));
    }

    #[tokio::test]
    async fn test_transport_error_keeps_anonymous() {
        let store = store_with(vec![
            Err(QuorumError::Unauthorized),
            Err(QuorumError::transport("timeout")),
        ]);

        store.refresh().await;
        let status = store.refresh().await;

        assert_eq!(status, SessionStatus::Anonymous);
    }

    #[tokio::test]
    async fn test_refresh_success_from_anonymous() {
        let store = store_with(vec![
            Err(QuorumError::Unauthorized),
            Ok(Identity::new("u2", "Ana")),
        ]);

        store.refresh().await;
        let status = store.refresh().await;

        assert_eq!(status, SessionStatus::Authenticated);
    }

    #[test]
    fn test_override_is_idempotent() {
        let store = store_with(vec![]);

        store.override_identity(Identity::new("u2", "Ana"));
        let first = store.current();
        store.override_identity(Identity::new("u2", "Ana"));

        assert_eq!(store.current(), first);
        assert_eq!(store.status(), SessionStatus::Authenticated);
    }

    #[test]
    fn test_override_round_trips_identity() {
        let store = store_with(vec![]);
        let identity = Identity {
            id: "u3".to_string(),
            display_name: "Noa".to_string(),
            avatar_url: Some("https://cdn.example/n.png".to_string()),
            created_at: None,
        };

        store.override_identity(identity.clone());

        assert_eq!(store.current().identity(), Some(&identity));
    }

    #[tokio::test]
    async fn test_clear_is_unconditional() {
        // From Loading
        let store = store_with(vec![]);
        store.clear();
        assert_eq!(store.status(), SessionStatus::Anonymous);

        // From Authenticated
        let store = store_with(vec![Ok(Identity::new("u1", "Kiri"))]);
        store.refresh().await;
        store.clear();
        assert_eq!(store.status(), SessionStatus::Anonymous);
        assert!(store.current().identity().is_none());

        // From Anonymous
        store.clear();
        assert_eq!(store.status(), SessionStatus::Anonymous);
    }

    #[tokio::test]
    async fn test_concurrent_refreshes_converge() {
        let store = Arc::new(store_with(vec![
            Ok(Identity::new("u1", "Kiri")),
            Ok(Identity::new("u2", "Ana")),
        ]));

        let a = {
            let store = store.clone();
            tokio::spawn(async move { store.refresh().await })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move { store.refresh().await })
        };
        let (a, b) = tokio::join!(a, b);
        a.unwrap();
        b.unwrap();

        // Last write wins; either response may have landed last, but the
        // result is a whole session from one of them.
        let session = store.current();
        let id = session.identity().map(|i| i.id.as_str());
        assert!(id == Some("u1") || id == Some("u2"));
    }
}
