use crate::domain::common::validation::{require_non_negative, require_text};
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

/// Milk supplier (farmer or collection point)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub village: String,
    /// Agreed purchase price, used as the default in reception forms
    #[serde(default)]
    pub price_per_liter: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Default for Supplier {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            village: String::new(),
            price_per_liter: 0.0,
            is_active: true,
            notes: None,
        }
    }
}

impl AggregateRoot for Supplier {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Name")?;
        require_non_negative(self.price_per_liter, "Price per liter")?;
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_payload() {
        let s: Supplier = serde_json::from_str(r#"{"id": 3, "name": "Green Farm"}"#).unwrap();
        assert_eq!(s.id, Some(3));
        assert!(s.is_active);
        assert_eq!(s.price_per_liter, 0.0);
        assert_eq!(Supplier::item_path(3), "/api/suppliers/3");
    }

    #[test]
    fn name_is_required() {
        let mut s = Supplier::default();
        assert!(s.validate().is_err());
        s.name = "Green Farm".into();
        assert!(s.validate().is_ok());
        s.price_per_liter = -1.0;
        assert!(s.validate().is_err());
    }
}
