use super::CodedEnum;
use serde::{Deserialize, Serialize};

/// Collection round of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    #[default]
    Morning,
    Evening,
}

impl CodedEnum for Shift {
    fn code(&self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Evening => "evening",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Evening => "Evening",
        }
    }

    fn all() -> Vec<Self> {
        vec![Shift::Morning, Shift::Evening]
    }
}
