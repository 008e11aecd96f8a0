//! Invoice endpoints (read-only).

use crmpro_core::Invoice;

use crate::error::ApiResult;
use crate::http;

/// Client for `/invoices`. List-only: no mutation endpoint exists.
#[derive(Debug, Clone)]
pub struct BillingClient {
    base_url: String,
    token: Option<String>,
}

impl BillingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Some(token.into()),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<Invoice>> {
        let client = reqwest::Client::new();
        let url = format!("{}/invoices", self.base_url);
        let req = http::with_bearer(client.get(&url), self.token.as_deref());
        http::fetch_json(req).await
    }
}
