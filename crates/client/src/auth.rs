//! Authentication endpoints.

use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::http;

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token envelope returned by a successful login.
///
/// Current backends spell the field `accessToken`; older ones used `token`.
/// Accept both spellings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
}

/// Payload for `POST /auth/register`: a new tenant plus its first user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub tenant_name: String,
    pub username: String,
    pub password: String,
}

/// Client for the auth endpoints. Unauthenticated by nature.
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let client = reqwest::Client::new();
        let url = format!("{}/auth/login", self.base_url);
        http::fetch_json(client.post(&url).json(request)).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        let client = reqwest::Client::new();
        let url = format!("{}/auth/register", self.base_url);
        http::send_checked(client.post(&url).json(request)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_accepts_both_token_spellings() {
        let current: LoginResponse = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
        assert_eq!(current.token, "abc");

        let legacy: LoginResponse = serde_json::from_str(r#"{"token":"xyz"}"#).unwrap();
        assert_eq!(legacy.token, "xyz");
    }

    #[test]
    fn register_request_serializes_camel_case() {
        let request = RegisterRequest {
            tenant_name: "Acme".to_string(),
            username: "alice".to_string(),
            password: "s3cret".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["tenantName"], "Acme");
        assert!(json.get("tenant_name").is_none());
    }
}
