//! Wire DTOs for the backend's JSON envelopes.
//!
//! Success bodies are `{ "data": ... }`, failures `{ "error": ... }` where
//! the error payload is either a bare string or an object with a `message`.

use quorum_core::identity::Identity;
use serde::{Deserialize, Serialize};

/// Success envelope: `{ "data": T }`
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// `/me` payload: `{ "user": Identity }`
#[derive(Debug, Deserialize)]
pub(crate) struct MePayload {
    pub user: Identity,
}

/// Failure envelope: `{ "error": ... }`
///
/// `error` is optional so a success body also parses here (as `None`);
/// callers check for `Some` before treating the response as a failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorBody {
    Message(String),
    Detailed { message: String },
}

impl ErrorBody {
    pub fn into_message(self) -> String {
        match self {
            Self::Message(message) | Self::Detailed { message } => message,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
    pub remember: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterRequest<'a> {
    pub login_name: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ForgotPasswordRequest<'a> {
    pub identifier: &'a str,
}

/// Login success payload. The backend reports the bearer token as either
/// `token` or `accessToken`, and may include the user inline.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<Identity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_string_or_object() {
        let bare: ErrorEnvelope = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert_eq!(bare.error.unwrap().into_message(), "nope");

        let detailed: ErrorEnvelope =
            serde_json::from_str(r#"{"error": {"message": "bad password"}}"#).unwrap();
        assert_eq!(detailed.error.unwrap().into_message(), "bad password");

        let success: ErrorEnvelope = serde_json::from_str(r#"{"data": {"ok": true}}"#).unwrap();
        assert!(success.error.is_none());
    }

    #[test]
    fn test_register_request_uses_login_name_key() {
        let body = serde_json::to_string(&RegisterRequest {
            login_name: "ana",
            password: "hunter22!",
        })
        .unwrap();
        assert!(body.contains("\"loginName\":\"ana\""));
    }

    #[test]
    fn test_login_data_accepts_either_token_key() {
        let token: LoginData = serde_json::from_str(r#"{"token": "t1"}"#).unwrap();
        assert_eq!(token.token.as_deref(), Some("t1"));

        let access: LoginData = serde_json::from_str(r#"{"accessToken": "t2"}"#).unwrap();
        assert_eq!(access.access_token.as_deref(), Some("t2"));
        assert!(access.user.is_none());
    }
}
