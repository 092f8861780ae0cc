pub mod aggregate;
pub mod balance;

pub use aggregate::{FeedCompany, FeedPurchase, FeedType};
pub use balance::{balances_for, BalanceError, SupplierBalance};
