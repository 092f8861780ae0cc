mod view;

pub use view::InventoryItemDetails;
