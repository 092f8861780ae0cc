use crate::domain::common::validation::{require_non_negative, require_text};
use crate::domain::common::AggregateRoot;
use crate::enums::CustomerType;
use serde::{Deserialize, Serialize};

/// Buyer of milk and dairy products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub customer_type: CustomerType,
    #[serde(default)]
    pub credit_limit: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            customer_type: CustomerType::default(),
            credit_limit: 0.0,
            is_active: true,
        }
    }
}

impl AggregateRoot for Customer {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Name")?;
        require_non_negative(self.credit_limit, "Credit limit")
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "customers"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CodedEnum;

    #[test]
    fn customer_type_codes() {
        for t in CustomerType::all() {
            assert_eq!(CustomerType::from_code(t.code()), Some(t));
        }
        let c: Customer =
            serde_json::from_str(r#"{"name": "Corner shop", "customer_type": "wholesale"}"#)
                .unwrap();
        assert_eq!(c.customer_type, CustomerType::Wholesale);
        assert!(c.validate().is_ok());
    }
}
