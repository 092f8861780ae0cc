use crate::domain::common::validation::{require_date, require_positive};
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::{PaymentDirection, PaymentMethod};
use serde::{Deserialize, Serialize};

/// Money received from a customer or paid out to a supplier
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: String,
    pub amount: f64,
    #[serde(default)]
    pub method: PaymentMethod,
    #[serde(default)]
    pub direction: PaymentDirection,
    #[serde(default)]
    pub supplier_id: Option<i64>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Payment {
    /// Outgoing payments settle supplier balances
    pub fn is_paid_to_supplier(&self, supplier_id: i64) -> bool {
        self.direction == PaymentDirection::Outgoing && self.supplier_id == Some(supplier_id)
    }

    /// Endpoint returning the PDF receipt of a stored payment
    pub fn receipt_path(id: i64) -> String {
        format!("{}/receipt", Self::item_path(id))
    }

    /// File name offered when the receipt is downloaded
    pub fn receipt_file_name(id: i64) -> String {
        format!("receipt-{}.pdf", id.as_string())
    }
}

impl AggregateRoot for Payment {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_date(&self.date, "Date")?;
        require_positive(self.amount, "Amount")?;
        match self.direction {
            PaymentDirection::Outgoing if self.supplier_id.is_none() => {
                Err("Supplier must be selected for an outgoing payment".into())
            }
            PaymentDirection::Incoming if self.customer_id.is_none() => {
                Err("Customer must be selected for an incoming payment".into())
            }
            _ => Ok(()),
        }
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "payments"
    }

    fn element_name() -> &'static str {
        "Payment"
    }

    fn list_name() -> &'static str {
        "Payments"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterparty_follows_direction() {
        let mut p = Payment {
            date: "2024-06-01".into(),
            amount: 250.0,
            direction: PaymentDirection::Outgoing,
            ..Default::default()
        };
        assert!(p.validate().is_err());
        p.supplier_id = Some(4);
        assert!(p.validate().is_ok());
        assert!(p.is_paid_to_supplier(4));
        assert!(!p.is_paid_to_supplier(5));

        p.direction = PaymentDirection::Incoming;
        assert!(p.validate().is_err());
        p.customer_id = Some(9);
        assert!(p.validate().is_ok());
        assert!(!p.is_paid_to_supplier(4));
    }

    #[test]
    fn receipt_endpoint() {
        assert_eq!(Payment::receipt_path(12), "/api/payments/12/receipt");
        assert_eq!(Payment::receipt_file_name(12), "receipt-12.pdf");
    }
}
