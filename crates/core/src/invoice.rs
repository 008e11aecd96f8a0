//! Invoice record (read-only from the console's perspective).

use serde::{Deserialize, Serialize};

use crate::id::{CustomerId, InvoiceId};

/// Invoice status lifecycle as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
    Cancelled,
}

impl InvoiceStatus {
    /// Chip color class for the status column.
    pub fn indicator(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "primary",
            InvoiceStatus::Unpaid => "warn",
            InvoiceStatus::Cancelled => "accent",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvoiceStatus::Paid => f.write_str("PAID"),
            InvoiceStatus::Unpaid => f.write_str("UNPAID"),
            InvoiceStatus::Cancelled => f.write_str("CANCELLED"),
        }
    }
}

/// Invoice view-model. No mutation endpoint exists for these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub amount_due: f64,
    /// Nullable on the wire; invoices with no recorded payment carry
    /// `"amountPaid": null` or omit the key entirely.
    pub amount_paid: Option<f64>,
    pub status: InvoiceStatus,
    pub customer_id: CustomerId,
}

impl Invoice {
    /// Unpaid invoices get a visually distinct row in the billing table.
    pub fn is_unpaid(&self) -> bool {
        self.status == InvoiceStatus::Unpaid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "id": 9,
            "invoiceNumber": "INV-2024-009",
            "amountDue": 1250.5,
            "amountPaid": 0.0,
            "status": "UNPAID",
            "customerId": 12
        }"#;

        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.id, InvoiceId::new(9));
        assert_eq!(invoice.invoice_number, "INV-2024-009");
        assert_eq!(invoice.amount_paid, Some(0.0));
        assert_eq!(invoice.status, InvoiceStatus::Unpaid);
        assert!(invoice.is_unpaid());
    }

    #[test]
    fn amount_paid_null_or_absent_decodes_as_none() {
        let with_null = r#"{
            "id": 3,
            "invoiceNumber": "INV-2024-003",
            "amountDue": 90.0,
            "amountPaid": null,
            "status": "UNPAID",
            "customerId": 5
        }"#;
        let invoice: Invoice = serde_json::from_str(with_null).unwrap();
        assert_eq!(invoice.amount_paid, None);

        let without_key = r#"{
            "id": 4,
            "invoiceNumber": "INV-2024-004",
            "amountDue": 90.0,
            "status": "UNPAID",
            "customerId": 5
        }"#;
        let invoice: Invoice = serde_json::from_str(without_key).unwrap();
        assert_eq!(invoice.amount_paid, None);
    }

    #[test]
    fn status_indicator_mapping() {
        assert_eq!(InvoiceStatus::Paid.indicator(), "primary");
        assert_eq!(InvoiceStatus::Unpaid.indicator(), "warn");
        assert_eq!(InvoiceStatus::Cancelled.indicator(), "accent");
    }

    #[test]
    fn status_round_trips_uppercase() {
        for (status, text) in [
            (InvoiceStatus::Paid, "\"PAID\""),
            (InvoiceStatus::Unpaid, "\"UNPAID\""),
            (InvoiceStatus::Cancelled, "\"CANCELLED\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), text);
            let back: InvoiceStatus = serde_json::from_str(text).unwrap();
            assert_eq!(back, status);
        }
    }
}
