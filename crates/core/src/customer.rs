//! Customer record as served by the backend.

use serde::{Deserialize, Serialize};

use crate::id::CustomerId;

/// Customer view-model.
///
/// `id` is absent until the backend has persisted the record. Everything
/// past `email` is optional on the wire; the backend may omit any of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// String on the wire; the backend mixes numeric and UUID user ids here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Customer {
    /// Status as displayed; records without one count as `Active`.
    pub fn display_status(&self) -> &str {
        self.status.as_deref().unwrap_or("Active")
    }

    /// Chip color class for the status column (`primary` for active
    /// customers, `warn` for everything else).
    pub fn status_indicator(&self) -> &'static str {
        if self.display_status() == "Active" {
            "primary"
        } else {
            "warn"
        }
    }
}
