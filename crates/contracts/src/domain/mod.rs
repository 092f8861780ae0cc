pub mod a001_supplier;
pub mod a002_customer;
pub mod a003_milk_reception;
pub mod a004_sale;
pub mod a005_payment;
pub mod a006_inventory_item;
pub mod a007_feed;
pub mod a008_hr;
pub mod a009_legal;
pub mod a010_operations;
pub mod common;
