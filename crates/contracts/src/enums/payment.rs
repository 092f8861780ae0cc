use super::CodedEnum;
use serde::{Deserialize, Serialize};

/// How a payment was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    BankTransfer,
    Check,
    MobileMoney,
}

impl CodedEnum for PaymentMethod {
    fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Check => "check",
            PaymentMethod::MobileMoney => "mobile_money",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::Check => "Check",
            PaymentMethod::MobileMoney => "Mobile money",
        }
    }

    fn all() -> Vec<Self> {
        vec![
            PaymentMethod::Cash,
            PaymentMethod::BankTransfer,
            PaymentMethod::Check,
            PaymentMethod::MobileMoney,
        ]
    }
}

/// Money flow relative to the dairy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentDirection {
    /// Received from a customer
    #[default]
    Incoming,
    /// Paid out to a supplier
    Outgoing,
}

impl CodedEnum for PaymentDirection {
    fn code(&self) -> &'static str {
        match self {
            PaymentDirection::Incoming => "incoming",
            PaymentDirection::Outgoing => "outgoing",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PaymentDirection::Incoming => "Incoming",
            PaymentDirection::Outgoing => "Outgoing",
        }
    }

    fn all() -> Vec<Self> {
        vec![PaymentDirection::Incoming, PaymentDirection::Outgoing]
    }
}
