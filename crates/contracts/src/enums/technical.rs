use super::CodedEnum;
use serde::{Deserialize, Serialize};

/// Lifecycle state of equipment and vehicles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    #[default]
    Active,
    UnderMaintenance,
    Retired,
}

impl CodedEnum for AssetStatus {
    fn code(&self) -> &'static str {
        match self {
            AssetStatus::Active => "active",
            AssetStatus::UnderMaintenance => "under_maintenance",
            AssetStatus::Retired => "retired",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            AssetStatus::Active => "Active",
            AssetStatus::UnderMaintenance => "Under maintenance",
            AssetStatus::Retired => "Retired",
        }
    }

    fn all() -> Vec<Self> {
        vec![
            AssetStatus::Active,
            AssetStatus::UnderMaintenance,
            AssetStatus::Retired,
        ]
    }
}

/// Incident severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl CodedEnum for Severity {
    fn code(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    fn all() -> Vec<Self> {
        vec![
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ]
    }
}
