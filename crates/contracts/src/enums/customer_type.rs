use super::CodedEnum;
use serde::{Deserialize, Serialize};

/// Customer segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    #[default]
    Retail,
    Wholesale,
    Distributor,
}

impl CodedEnum for CustomerType {
    fn code(&self) -> &'static str {
        match self {
            CustomerType::Retail => "retail",
            CustomerType::Wholesale => "wholesale",
            CustomerType::Distributor => "distributor",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            CustomerType::Retail => "Retail",
            CustomerType::Wholesale => "Wholesale",
            CustomerType::Distributor => "Distributor",
        }
    }

    fn all() -> Vec<Self> {
        vec![
            CustomerType::Retail,
            CustomerType::Wholesale,
            CustomerType::Distributor,
        ]
    }
}
