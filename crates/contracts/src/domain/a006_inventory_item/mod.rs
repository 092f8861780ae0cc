pub mod aggregate;

pub use aggregate::{low_stock_count, total_stock_value, InventoryItem};
