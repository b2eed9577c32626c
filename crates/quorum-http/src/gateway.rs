//! HTTP implementation of the identity gateway.

use crate::config::ApiConfig;
use crate::dto::{DataEnvelope, MePayload};
use async_trait::async_trait;
use quorum_core::error::{QuorumError, Result};
use quorum_core::identity::Identity;
use quorum_core::session::IdentityGateway;
use reqwest::{Client, StatusCode};

/// Gateway implementation that queries `GET <base>/me` over HTTP.
///
/// Credentials travel implicitly with the client (cookie store, ambient
/// headers); this gateway adds none of its own.
#[derive(Clone)]
pub struct HttpIdentityGateway {
    client: Client,
    config: ApiConfig,
}

impl HttpIdentityGateway {
    /// Creates a gateway over an existing client.
    ///
    /// Share the client with [`crate::AuthClient`] so the cookie set by
    /// login is visible to `/me`.
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Creates a gateway with its own client built from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: ApiConfig) -> Result<Self> {
        let client = config.build_client()?;
        Ok(Self::new(client, config))
    }
}

#[async_trait]
impl IdentityGateway for HttpIdentityGateway {
    async fn fetch_identity(&self) -> Result<Identity> {
        let url = self.config.endpoint("me");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| QuorumError::transport(format!("GET /me failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            // Body ignored on denial
            return Err(QuorumError::Unauthorized);
        }
        if !status.is_success() {
            return Err(QuorumError::transport(format!(
                "GET /me returned unexpected status {status}"
            )));
        }

        let body: DataEnvelope<MePayload> = response
            .json()
            .await
            .map_err(|e| QuorumError::transport(format!("undecodable /me body: {e}")))?;

        Ok(body.data.user)
    }
}
