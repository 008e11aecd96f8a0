//! `crmpro-session` — client-side session state derived from a bearer token.
//!
//! This crate is intentionally decoupled from HTTP and the UI: it decodes a
//! token's payload for display and role gating, persists the raw token
//! through a pluggable store, and derives the booleans the views read.
//! Signature verification stays with the backend that minted the token.

pub mod claims;
pub mod roles;
pub mod session;
pub mod store;
pub mod token;

pub use claims::{SessionClaims, validate_claims};
pub use roles::Role;
pub use session::Session;
pub use store::{MemoryStore, TOKEN_STORAGE_KEY, TokenStore};
pub use token::{TokenError, decode_claims, derive_claims};

#[cfg(target_arch = "wasm32")]
pub use store::BrowserStore;
