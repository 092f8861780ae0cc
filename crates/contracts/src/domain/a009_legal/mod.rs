pub mod aggregate;

pub use aggregate::{LegalCase, LegalConsultation, LegalContract, LegalDocument};
