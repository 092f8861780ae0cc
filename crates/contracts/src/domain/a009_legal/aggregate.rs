use crate::domain::common::validation::{
    optional_date, require_date, require_non_negative, require_text,
};
use crate::domain::common::AggregateRoot;
use crate::enums::{CaseStatus, ContractStatus};
use serde::{Deserialize, Serialize};

// ============================================================================
// Contract
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegalContract {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    /// Counterparty of the contract
    pub party: String,
    #[serde(default)]
    pub contract_type: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub status: ContractStatus,
}

impl AggregateRoot for LegalContract {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.title, "Title")?;
        require_text(&self.party, "Party")?;
        require_date(&self.start_date, "Start date")?;
        optional_date(&self.end_date, "End date")?;
        if let Some(end) = self.end_date.as_deref().filter(|e| !e.trim().is_empty()) {
            if end < self.start_date.as_str() {
                return Err("End date cannot be before the start date".into());
            }
        }
        require_non_negative(self.value, "Value")
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "legal/contracts"
    }

    fn element_name() -> &'static str {
        "Contract"
    }

    fn list_name() -> &'static str {
        "Contracts"
    }
}

// ============================================================================
// Case
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegalCase {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub case_number: String,
    #[serde(default)]
    pub court: String,
    pub opened_on: String,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default)]
    pub description: Option<String>,
}

impl AggregateRoot for LegalCase {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.title, "Title")?;
        require_date(&self.opened_on, "Opening date")
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "legal/cases"
    }

    fn element_name() -> &'static str {
        "Case"
    }

    fn list_name() -> &'static str {
        "Cases"
    }
}

// ============================================================================
// Consultation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegalConsultation {
    #[serde(default)]
    pub id: Option<i64>,
    pub subject: String,
    #[serde(default)]
    pub lawyer: String,
    pub date: String,
    #[serde(default)]
    pub fee: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AggregateRoot for LegalConsultation {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.subject, "Subject")?;
        require_date(&self.date, "Date")?;
        require_non_negative(self.fee, "Fee")
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "legal/consultations"
    }

    fn element_name() -> &'static str {
        "Consultation"
    }

    fn list_name() -> &'static str {
        "Consultations"
    }
}

// ============================================================================
// Document
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegalDocument {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub issued_on: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AggregateRoot for LegalDocument {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.title, "Title")?;
        require_text(&self.document_type, "Document type")?;
        optional_date(&self.issued_on, "Issue date")
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "legal/documents"
    }

    fn element_name() -> &'static str {
        "Document"
    }

    fn list_name() -> &'static str {
        "Documents"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_dates_are_ordered() {
        let mut c = LegalContract {
            title: "Milk supply 2024".into(),
            party: "Coop".into(),
            start_date: "2024-01-01".into(),
            end_date: Some("2023-12-31".into()),
            ..Default::default()
        };
        assert!(c.validate().is_err());
        c.end_date = Some("2024-12-31".into());
        assert!(c.validate().is_ok());
        c.end_date = Some(String::new());
        assert!(c.validate().is_ok());
        assert_eq!(LegalContract::item_path(5), "/api/legal/contracts/5");
    }

    #[test]
    fn required_fields() {
        assert!(LegalCase::default().validate().is_err());
        assert!(LegalConsultation::default().validate().is_err());
        let d = LegalDocument {
            title: "License".into(),
            document_type: "Permit".into(),
            ..Default::default()
        };
        assert!(d.validate().is_ok());
    }
}
