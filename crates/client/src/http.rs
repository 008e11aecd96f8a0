//! Shared request plumbing for the resource clients.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Attach the bearer token when one is present.
pub(crate) fn with_bearer(req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}

/// Send, then map transport failures and non-2xx statuses onto `ApiError`.
pub(crate) async fn send_checked(req: RequestBuilder) -> ApiResult<Response> {
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "request rejected by backend");
        return Err(ApiError::Status(status.as_u16(), body));
    }

    Ok(resp)
}

/// Send and decode a JSON response body.
pub(crate) async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> ApiResult<T> {
    let resp = send_checked(req).await?;
    resp.json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
