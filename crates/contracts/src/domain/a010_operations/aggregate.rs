use crate::domain::common::validation::{
    optional_date, require_date, require_non_negative, require_ref, require_text,
};
use crate::domain::common::AggregateRoot;
use crate::enums::{AssetStatus, Severity};
use serde::{Deserialize, Serialize};

// ============================================================================
// Equipment
// ============================================================================

/// Plant equipment (coolers, tanks, separators, generators)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub status: AssetStatus,
}

impl AggregateRoot for Equipment {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Name")?;
        optional_date(&self.purchase_date, "Purchase date")
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "operations/equipment"
    }

    fn element_name() -> &'static str {
        "Equipment"
    }

    fn list_name() -> &'static str {
        "Equipment"
    }
}

// ============================================================================
// Maintenance
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Maintenance {
    #[serde(default)]
    pub id: Option<i64>,
    pub equipment_id: Option<i64>,
    pub date: String,
    #[serde(default)]
    pub maintenance_type: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub performed_by: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AggregateRoot for Maintenance {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_ref(self.equipment_id, "Equipment")?;
        require_date(&self.date, "Date")?;
        require_non_negative(self.cost, "Cost")
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "operations/maintenance"
    }

    fn element_name() -> &'static str {
        "Maintenance"
    }

    fn list_name() -> &'static str {
        "Maintenance"
    }
}

// ============================================================================
// Incident
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Incident {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resolved: bool,
}

impl AggregateRoot for Incident {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.title, "Title")?;
        require_date(&self.date, "Date")
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "operations/incidents"
    }

    fn element_name() -> &'static str {
        "Incident"
    }

    fn list_name() -> &'static str {
        "Incidents"
    }
}

// ============================================================================
// Vehicle
// ============================================================================

/// Collection or delivery vehicle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub id: Option<i64>,
    pub plate_number: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub capacity_liters: f64,
    #[serde(default)]
    pub status: AssetStatus,
}

impl AggregateRoot for Vehicle {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.plate_number, "Plate number")?;
        require_non_negative(self.capacity_liters, "Capacity")
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "operations/vehicles"
    }

    fn element_name() -> &'static str {
        "Vehicle"
    }

    fn list_name() -> &'static str {
        "Vehicles"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maintenance_needs_equipment() {
        let mut m = Maintenance {
            date: "2024-09-01".into(),
            cost: 80.0,
            ..Default::default()
        };
        assert_eq!(m.validate(), Err("Equipment must be selected".to_string()));
        m.equipment_id = Some(1);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn vehicle_and_incident_required_fields() {
        assert!(Vehicle::default().validate().is_err());
        let v = Vehicle {
            plate_number: "KDA 123B".into(),
            capacity_liters: 2000.0,
            ..Default::default()
        };
        assert!(v.validate().is_ok());
        let i = Incident {
            title: "Cooler power loss".into(),
            date: "2024-09-03T10:00:00Z".into(),
            ..Default::default()
        };
        assert!(i.validate().is_ok());
        assert_eq!(Incident::api_path(), "/api/operations/incidents");
    }
}
