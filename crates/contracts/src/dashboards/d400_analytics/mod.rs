//! Analytics dashboard: pure aggregation over fetched record lists

pub mod aggregation;
pub mod dto;

pub use aggregation::*;
pub use dto::*;
