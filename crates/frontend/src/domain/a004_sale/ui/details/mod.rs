mod view;

pub use view::SaleDetails;
