mod view;

pub use view::MilkReceptionDetails;
