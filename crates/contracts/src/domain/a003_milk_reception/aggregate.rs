use crate::domain::common::validation::{require_date, require_non_negative, require_positive, require_ref};
use crate::domain::common::AggregateRoot;
use crate::enums::Shift;
use serde::{Deserialize, Serialize};

/// Milk delivered by a supplier at the collection point
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MilkReception {
    #[serde(default)]
    pub id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub date: String,
    #[serde(default)]
    pub shift: Shift,
    pub quantity_liters: f64,
    #[serde(default)]
    pub fat_percentage: Option<f64>,
    pub price_per_liter: f64,
    /// Amount owed to the supplier, as stored by the backend
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl MilkReception {
    pub fn computed_total(&self) -> f64 {
        self.quantity_liters * self.price_per_liter
    }

    /// Recompute the stored total after quantity or price changed in a form
    pub fn refresh_total(&mut self) {
        self.total_amount = self.computed_total();
    }
}

impl AggregateRoot for MilkReception {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_ref(self.supplier_id, "Supplier")?;
        require_date(&self.date, "Date")?;
        require_positive(self.quantity_liters, "Quantity")?;
        require_non_negative(self.price_per_liter, "Price per liter")?;
        if let Some(fat) = self.fat_percentage {
            if !(0.0..=100.0).contains(&fat) {
                return Err("Fat percentage must be between 0 and 100".into());
            }
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "milk-receptions"
    }

    fn element_name() -> &'static str {
        "Milk reception"
    }

    fn list_name() -> &'static str {
        "Milk receptions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reception() -> MilkReception {
        MilkReception {
            supplier_id: Some(1),
            date: "2024-05-02".into(),
            quantity_liters: 120.0,
            price_per_liter: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn total_follows_quantity_and_price() {
        let mut r = reception();
        r.refresh_total();
        assert_eq!(r.total_amount, 60.0);
    }

    #[test]
    fn validation_requires_supplier_and_quantity() {
        let mut r = reception();
        assert!(r.validate().is_ok());
        r.supplier_id = None;
        assert_eq!(r.validate(), Err("Supplier must be selected".to_string()));
        r.supplier_id = Some(1);
        r.quantity_liters = 0.0;
        assert!(r.validate().is_err());
        r.quantity_liters = 10.0;
        r.fat_percentage = Some(140.0);
        assert!(r.validate().is_err());
    }
}
