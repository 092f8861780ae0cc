use crate::domain::common::validation::{require_date, require_non_negative, require_positive, require_ref};
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sale of milk or dairy products to a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(default)]
    pub id: Option<i64>,
    pub customer_id: Option<i64>,
    pub date: String,
    #[serde(default = "default_product")]
    pub product: String,
    pub quantity_liters: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_product() -> String {
    "Milk".to_string()
}

impl Default for Sale {
    fn default() -> Self {
        Self {
            id: None,
            customer_id: None,
            date: String::new(),
            product: default_product(),
            quantity_liters: 0.0,
            unit_price: 0.0,
            total_amount: 0.0,
            paid_amount: 0.0,
            notes: None,
        }
    }
}

impl Sale {
    pub fn computed_total(&self) -> f64 {
        self.quantity_liters * self.unit_price
    }

    pub fn refresh_total(&mut self) {
        self.total_amount = self.computed_total();
    }

    /// Amount still to be collected, never negative
    pub fn outstanding(&self) -> f64 {
        (self.total_amount - self.paid_amount).max(0.0)
    }
}

impl AggregateRoot for Sale {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_ref(self.customer_id, "Customer")?;
        require_date(&self.date, "Date")?;
        require_positive(self.quantity_liters, "Quantity")?;
        require_non_negative(self.unit_price, "Unit price")?;
        require_non_negative(self.paid_amount, "Paid amount")
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "sales"
    }

    fn element_name() -> &'static str {
        "Sale"
    }

    fn list_name() -> &'static str {
        "Sales"
    }
}

/// Unpaid amount per customer; sales without a customer are skipped
pub fn outstanding_by_customer(sales: &[Sale]) -> BTreeMap<i64, f64> {
    let mut totals = BTreeMap::new();
    for sale in sales {
        if let Some(customer_id) = sale.customer_id {
            *totals.entry(customer_id).or_insert(0.0) += sale.outstanding();
        }
    }
    totals
}

pub fn total_outstanding(sales: &[Sale]) -> f64 {
    sales.iter().map(Sale::outstanding).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(customer: Option<i64>, total: f64, paid: f64) -> Sale {
        Sale {
            customer_id: customer,
            total_amount: total,
            paid_amount: paid,
            ..Default::default()
        }
    }

    #[test]
    fn outstanding_grouped_by_customer() {
        let sales = vec![
            sale(Some(1), 100.0, 40.0),
            sale(Some(1), 50.0, 50.0),
            sale(Some(2), 30.0, 0.0),
            sale(None, 10.0, 0.0),
            sale(Some(3), 10.0, 25.0),
        ];
        let by_customer = outstanding_by_customer(&sales);
        assert_eq!(by_customer.get(&1), Some(&60.0));
        assert_eq!(by_customer.get(&2), Some(&30.0));
        assert_eq!(by_customer.get(&3), Some(&0.0));
        assert_eq!(by_customer.len(), 3);
        assert_eq!(total_outstanding(&sales), 100.0);
        assert_eq!(total_outstanding(&[]), 0.0);
    }

    #[test]
    fn outstanding_is_clamped() {
        let mut s = Sale {
            customer_id: Some(2),
            date: "2024-05-02".into(),
            quantity_liters: 10.0,
            unit_price: 1.2,
            ..Default::default()
        };
        s.refresh_total();
        assert!((s.total_amount - 12.0).abs() < 1e-9);
        s.paid_amount = 5.0;
        assert!((s.outstanding() - 7.0).abs() < 1e-9);
        s.paid_amount = 20.0;
        assert_eq!(s.outstanding(), 0.0);
        assert!(s.validate().is_ok());
    }
}
