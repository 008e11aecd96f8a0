//! Customer CRUD endpoints.

use crmpro_core::{Customer, CustomerId};

use crate::error::ApiResult;
use crate::http;

/// Client for `/customers`. Carries the bearer token of the active session.
#[derive(Debug, Clone)]
pub struct CustomersClient {
    base_url: String,
    token: Option<String>,
}

impl CustomersClient {
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

    fn url(&self, suffix: &str) -> String {
        format!("{}/customers{}", self.base_url, suffix)
    }

    /// Fetch the whole collection; filtering and paging stay client-side.
    pub async fn list(&self) -> ApiResult<Vec<Customer>> {
        let client = reqwest::Client::new();
        let req = http::with_bearer(client.get(self.url("")), self.token.as_deref());
        http::fetch_json(req).await
    }

    pub async fn create(&self, customer: &Customer) -> ApiResult<Customer> {
        let client = reqwest::Client::new();
        let req = http::with_bearer(
            client.post(self.url("")).json(customer),
            self.token.as_deref(),
        );
        http::fetch_json(req).await
    }

    pub async fn update(&self, id: CustomerId, customer: &Customer) -> ApiResult<Customer> {
        let client = reqwest::Client::new();
        let req = http::with_bearer(
            client.put(self.url(&format!("/{id}"))).json(customer),
            self.token.as_deref(),
        );
        http::fetch_json(req).await
    }

    pub async fn delete(&self, id: CustomerId) -> ApiResult<()> {
        let client = reqwest::Client::new();
        let req = http::with_bearer(
            client.delete(self.url(&format!("/{id}"))),
            self.token.as_deref(),
        );
        http::send_checked(req).await?;
        Ok(())
    }
}
