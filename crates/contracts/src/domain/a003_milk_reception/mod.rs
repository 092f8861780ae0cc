pub mod aggregate;

pub use aggregate::MilkReception;
