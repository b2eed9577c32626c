//! Client for the auth endpoints: login, registration, forgot-password,
//! and best-effort logout.
//!
//! These are the collaborator calls around the session store: after a
//! successful [`AuthClient::login`], callers either push the returned
//! identity into the store via `override_identity` or trigger a full
//! `refresh()`; after [`AuthClient::logout`], callers `clear()` the store
//! unconditionally.

use crate::config::ApiConfig;
use crate::dto::{
    DataEnvelope, ErrorEnvelope, ForgotPasswordRequest, LoginData, LoginRequest, RegisterRequest,
};
use quorum_core::error::{QuorumError, Result};
use quorum_core::identity::Identity;
use reqwest::Client;
use serde::Serialize;

/// Result of a successful login call.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Bearer token, when the backend issues one in addition to the cookie.
    /// Persisting it is the caller's concern.
    pub token: Option<String>,
    /// The logged-in identity, when the backend includes it inline
    pub identity: Option<Identity>,
}

/// Client for the `<base>/auth/*` endpoints.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    config: ApiConfig,
}

impl AuthClient {
    /// Creates an auth client over an existing client.
    ///
    /// Share the client with [`crate::HttpIdentityGateway`] so the login
    /// cookie is visible to `/me`.
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Creates an auth client with its own client built from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: ApiConfig) -> Result<Self> {
        let client = config.build_client()?;
        Ok(Self::new(client, config))
    }

    /// Logs in with a username-or-email identifier.
    ///
    /// # Errors
    ///
    /// - `Rejected`: the backend returned an `{ "error": ... }` envelope or a
    ///   non-success status (bad credentials, locked account, ...)
    /// - `Transport`: the endpoint was unreachable or its body undecodable
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
        remember: bool,
    ) -> Result<LoginOutcome> {
        let data = self
            .submit(
                "auth/login",
                &LoginRequest {
                    identifier,
                    password,
                    remember,
                },
            )
            .await?;

        let data: LoginData = serde_json::from_value(data)
            .map_err(|e| QuorumError::transport(format!("undecodable login payload: {e}")))?;

        tracing::debug!(identifier, "login accepted");
        Ok(LoginOutcome {
            token: data.token.or(data.access_token),
            identity: data.user,
        })
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`login`](Self::login); `Rejected` carries the
    /// backend's message (e.g. name already taken).
    pub async fn register(&self, login_name: &str, password: &str) -> Result<()> {
        self.submit(
            "auth/register",
            &RegisterRequest {
                login_name,
                password,
            },
        )
        .await?;

        tracing::debug!(login_name, "registration accepted");
        Ok(())
    }

    /// Requests a password reset for the given identifier.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`login`](Self::login).
    pub async fn forgot_password(&self, identifier: &str) -> Result<()> {
        self.submit("auth/forgot-password", &ForgotPasswordRequest { identifier })
            .await?;
        Ok(())
    }

    /// Logs out server-side, best-effort.
    ///
    /// The authoritative session lives on the backend; locally the caller
    /// clears the session store regardless of this call's outcome, so
    /// failures are logged and swallowed.
    pub async fn logout(&self) {
        let url = self.config.endpoint("auth/logout");

        match self.client.post(&url).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!("logout acknowledged");
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "logout endpoint rejected the request");
            }
            Err(err) => {
                tracing::warn!(error = %err, "logout request failed");
            }
        }
    }

    /// POSTs a JSON body and unwraps the `{ "data": ... }` envelope.
    ///
    /// An `{ "error": ... }` envelope wins over the status code, matching the
    /// backend's contract of sometimes reporting failures with a 200.
    async fn submit<B: Serialize>(&self, path: &str, body: &B) -> Result<serde_json::Value> {
        let url = self.config.endpoint(path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| QuorumError::transport(format!("POST /{path} failed: {e}")))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| QuorumError::transport(format!("failed to read /{path} body: {e}")))?;

        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(&bytes)
            && let Some(error) = envelope.error
        {
            return Err(QuorumError::rejected(error.into_message()));
        }
        if !status.is_success() {
            return Err(QuorumError::rejected(format!(
                "/{path} failed with status {status}"
            )));
        }

        let envelope: DataEnvelope<serde_json::Value> = serde_json::from_slice(&bytes)
            .map_err(|e| QuorumError::transport(format!("undecodable /{path} body: {e}")))?;
        Ok(envelope.data)
    }
}
