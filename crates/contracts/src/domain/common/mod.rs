//! Common types and traits for all record types

pub mod aggregate_id;
pub mod aggregate_root;
pub mod validation;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
