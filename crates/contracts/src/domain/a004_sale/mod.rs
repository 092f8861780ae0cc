pub mod aggregate;

pub use aggregate::{outstanding_by_customer, total_outstanding, Sale};
