//! Closed vocabularies shared by the record types
//!
//! Every enum serializes to its `code()` so the backend and the `<select>`
//! controls speak the same strings.

pub mod attendance_status;
pub mod customer_type;
pub mod legal_status;
pub mod payment;
pub mod shift;
pub mod technical;

pub use attendance_status::AttendanceStatus;
pub use customer_type::CustomerType;
pub use legal_status::{CaseStatus, ContractStatus};
pub use payment::{PaymentDirection, PaymentMethod};
pub use shift::Shift;
pub use technical::{AssetStatus, Severity};

/// Enum with a stable wire code and a display name
pub trait CodedEnum: Copy + PartialEq + 'static {
    /// Wire/select code
    fn code(&self) -> &'static str;

    /// Human-readable name
    fn display_name(&self) -> &'static str;

    /// All variants in declaration order
    fn all() -> Vec<Self>;

    /// Parse from a code, `None` for unknown codes
    fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_codes_round_trip<E: CodedEnum + std::fmt::Debug>() {
        for v in E::all() {
            assert_eq!(E::from_code(v.code()), Some(v));
            assert!(!v.display_name().is_empty());
        }
        assert_eq!(E::from_code("no-such-code"), None);
    }

    #[test]
    fn all_enums_round_trip_codes() {
        assert_codes_round_trip::<AttendanceStatus>();
        assert_codes_round_trip::<CustomerType>();
        assert_codes_round_trip::<CaseStatus>();
        assert_codes_round_trip::<ContractStatus>();
        assert_codes_round_trip::<PaymentDirection>();
        assert_codes_round_trip::<PaymentMethod>();
        assert_codes_round_trip::<Shift>();
        assert_codes_round_trip::<AssetStatus>();
        assert_codes_round_trip::<Severity>();
    }

    #[test]
    fn serde_uses_codes() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank_transfer\""
        );
        assert_eq!(
            serde_json::from_str::<AssetStatus>("\"under_maintenance\"").unwrap(),
            AssetStatus::UnderMaintenance
        );
    }
}
