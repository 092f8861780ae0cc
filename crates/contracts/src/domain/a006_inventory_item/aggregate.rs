use crate::domain::common::validation::{require_non_negative, require_text};
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

/// Stock line (packaging, feed, cleaning supplies, spare parts)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub quantity: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Reorder threshold
    #[serde(default)]
    pub min_quantity: f64,
    #[serde(default)]
    pub unit_cost: f64,
    #[serde(default)]
    pub location: String,
}

fn default_unit() -> String {
    "pcs".to_string()
}

impl Default for InventoryItem {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            category: String::new(),
            quantity: 0.0,
            unit: default_unit(),
            min_quantity: 0.0,
            unit_cost: 0.0,
            location: String::new(),
        }
    }
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    pub fn stock_value(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}

pub fn low_stock_count(items: &[InventoryItem]) -> usize {
    items.iter().filter(|i| i.is_low_stock()).count()
}

pub fn total_stock_value(items: &[InventoryItem]) -> f64 {
    items.iter().map(InventoryItem::stock_value).sum()
}

impl AggregateRoot for InventoryItem {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Name")?;
        require_text(&self.unit, "Unit")?;
        require_non_negative(self.quantity, "Quantity")?;
        require_non_negative(self.min_quantity, "Minimum quantity")?;
        require_non_negative(self.unit_cost, "Unit cost")
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "inventory"
    }

    fn element_name() -> &'static str {
        "Inventory item"
    }

    fn list_name() -> &'static str {
        "Inventory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, min_quantity: f64, unit_cost: f64) -> InventoryItem {
        InventoryItem {
            name: "Bottles".into(),
            quantity,
            min_quantity,
            unit_cost,
            ..Default::default()
        }
    }

    #[test]
    fn low_stock_includes_threshold() {
        assert!(item(5.0, 5.0, 1.0).is_low_stock());
        assert!(!item(6.0, 5.0, 1.0).is_low_stock());
    }

    #[test]
    fn totals() {
        let items = vec![item(10.0, 2.0, 0.5), item(1.0, 2.0, 3.0)];
        assert_eq!(low_stock_count(&items), 1);
        assert!((total_stock_value(&items) - 8.0).abs() < 1e-9);
        assert_eq!(total_stock_value(&[]), 0.0);
    }
}
