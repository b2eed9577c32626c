//! HTTP infrastructure for the Quorum client SDK.
//!
//! Provides the reqwest-backed [`HttpIdentityGateway`] consumed by
//! `quorum_core::session::SessionStore`, and the [`AuthClient`] for the
//! login, registration, forgot-password, and logout endpoints.
//!
//! Credentials are carried implicitly: the shared [`reqwest::Client`] keeps a
//! cookie store, so the cookie set by a successful login is presented on
//! subsequent `/me` calls. Build one client via [`ApiConfig::build_client`]
//! and hand it to both the gateway and the auth client.

pub mod auth;
pub mod config;
mod dto;
pub mod gateway;

pub use auth::{AuthClient, LoginOutcome};
pub use config::ApiConfig;
pub use gateway::HttpIdentityGateway;
