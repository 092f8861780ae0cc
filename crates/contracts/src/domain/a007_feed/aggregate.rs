use crate::domain::common::validation::{
    require_date, require_non_negative, require_positive, require_ref, require_text,
};
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

// ============================================================================
// Feed company
// ============================================================================

/// Vendor of cattle feed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedCompany {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl AggregateRoot for FeedCompany {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Company name")
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "feed-companies"
    }

    fn element_name() -> &'static str {
        "Feed company"
    }

    fn list_name() -> &'static str {
        "Feed companies"
    }
}

// ============================================================================
// Feed type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedType {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Price suggested in the purchase dialog
    #[serde(default)]
    pub default_price: f64,
}

fn default_unit() -> String {
    "kg".to_string()
}

impl Default for FeedType {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            unit: default_unit(),
            default_price: 0.0,
        }
    }
}

impl AggregateRoot for FeedType {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Feed type name")?;
        require_non_negative(self.default_price, "Default price")
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "feed-types"
    }

    fn element_name() -> &'static str {
        "Feed type"
    }

    fn list_name() -> &'static str {
        "Feed types"
    }
}

// ============================================================================
// Feed purchase
// ============================================================================

/// Feed bought on behalf of a supplier and charged against the supplier's milk balance
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedPurchase {
    #[serde(default)]
    pub id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub feed_company_id: Option<i64>,
    pub feed_type_id: Option<i64>,
    pub date: String,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FeedPurchase {
    pub fn computed_total(&self) -> f64 {
        self.quantity * self.unit_price
    }

    pub fn refresh_total(&mut self) {
        self.total_amount = self.computed_total();
    }
}

impl AggregateRoot for FeedPurchase {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_ref(self.supplier_id, "Supplier")?;
        require_ref(self.feed_company_id, "Feed company")?;
        require_ref(self.feed_type_id, "Feed type")?;
        require_date(&self.date, "Date")?;
        require_positive(self.quantity, "Quantity")?;
        require_positive(self.unit_price, "Unit price")
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "feed-purchases"
    }

    fn element_name() -> &'static str {
        "Feed purchase"
    }

    fn list_name() -> &'static str {
        "Feed purchases"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_requires_all_references() {
        let mut p = FeedPurchase {
            supplier_id: Some(1),
            feed_company_id: Some(2),
            feed_type_id: None,
            date: "2024-07-10".into(),
            quantity: 50.0,
            unit_price: 0.8,
            ..Default::default()
        };
        assert_eq!(p.validate(), Err("Feed type must be selected".to_string()));
        p.feed_type_id = Some(3);
        assert!(p.validate().is_ok());
        p.refresh_total();
        assert!((p.total_amount - 40.0).abs() < 1e-9);
    }

    #[test]
    fn catalog_records_need_names() {
        assert!(FeedCompany::default().validate().is_err());
        assert!(FeedType::default().validate().is_err());
        let t = FeedType {
            name: "Bran".into(),
            ..Default::default()
        };
        assert!(t.validate().is_ok());
        assert_eq!(FeedType::api_path(), "/api/feed-types");
    }
}
