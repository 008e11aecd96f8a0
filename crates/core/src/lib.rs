//! `crmpro-core` — view-model domain foundation.
//!
//! This crate contains **pure domain** types (no IO, no HTTP, no UI): the
//! typed identifiers, the customer and invoice records as the backend serves
//! them, and the field validation the forms share.

pub mod customer;
pub mod error;
pub mod id;
pub mod invoice;
pub mod validate;

pub use customer::Customer;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, InvoiceId, TenantId};
pub use invoice::{Invoice, InvoiceStatus};
