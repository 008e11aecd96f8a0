//! `crmpro-console`
//!
//! **Responsibility:** The CRM Pro single-page admin console.
//!
//! This crate provides:
//! - Client-side table state (filter, sort, paginate over fetched rows)
//! - Form drafts with validation for the dialogs and auth screens
//! - Display formatting helpers
//! - The Leptos component tree (browser builds only)
//!
//! The console is a **thin shell** around the CRM Pro API: it fetches whole
//! collections and keeps every view concern on the client. The view-state
//! modules are target-independent so they test natively; only `frontend`
//! needs a browser.

pub mod fmt;
pub mod form;
pub mod table;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
