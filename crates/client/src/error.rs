//! Transport error model shared by the resource clients.

use thiserror::Error;

/// Result type for all REST calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure surface of a REST call.
///
/// The console only ever shows a generic toast; these variants exist so
/// callers and logs can still tell transport, status and decode failures
/// apart.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({0}): {1}")]
    Status(u16, String),

    #[error("response parse error: {0}")]
    Decode(String),
}
