//! Titles of the tabs; aggregate pages reuse the record's list name.

use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_customer::Customer;
use contracts::domain::a003_milk_reception::MilkReception;
use contracts::domain::a004_sale::Sale;
use contracts::domain::a005_payment::Payment;
use contracts::domain::a006_inventory_item::InventoryItem;
use contracts::domain::a008_hr::{Attendance, Employee};
use contracts::domain::common::AggregateRoot;

/// Every tab key the registry can render, in sidebar order
pub const TAB_KEYS: &[&str] = &[
    "d400_analytics",
    "a001_supplier",
    "a003_milk_reception",
    "a007_feed",
    "a002_customer",
    "a004_sale",
    "a005_payment",
    "a006_inventory_item",
    "a008_employee",
    "a008_attendance",
    "a009_legal",
    "a010_operations",
];

/// Title for a tab key, `None` for keys the shell does not know
pub fn tab_label_for_key(key: &str) -> Option<&'static str> {
    let label = match key {
        "d400_analytics" => "Analytics",
        "a001_supplier" => Supplier::list_name(),
        "a002_customer" => Customer::list_name(),
        "a003_milk_reception" => MilkReception::list_name(),
        "a004_sale" => Sale::list_name(),
        "a005_payment" => Payment::list_name(),
        "a006_inventory_item" => InventoryItem::list_name(),
        "a007_feed" => "Feed",
        "a008_employee" => Employee::list_name(),
        "a008_attendance" => Attendance::list_name(),
        "a009_legal" => "Legal",
        "a010_operations" => "Operations",
        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_key_has_a_label() {
        for key in TAB_KEYS {
            assert!(tab_label_for_key(key).is_some(), "missing label for {}", key);
        }
        assert_eq!(tab_label_for_key("a999_unknown"), None);
    }
}
