//! `crmpro-client` — stateless REST clients for the console.
//!
//! One client per resource, mapping CRUD verbs to fixed endpoints under a
//! single base URL. No retry and no server-side pagination: collections come
//! back whole and the console filters, sorts and pages them client-side.

pub mod auth;
pub mod billing;
pub mod customers;
pub mod error;

mod http;

pub use auth::{AuthClient, LoginRequest, LoginResponse, RegisterRequest};
pub use billing::BillingClient;
pub use customers::CustomersClient;
pub use error::{ApiError, ApiResult};

/// Default REST base URL of the backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

/// Base URL the clients are built against.
///
/// Fixed at compile time; set `CRMPRO_API_BASE` in the build environment to
/// point a bundle at another backend.
pub fn api_base() -> String {
    option_env!("CRMPRO_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}
