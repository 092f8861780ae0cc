mod view;

pub use view::SupplierDetails;
