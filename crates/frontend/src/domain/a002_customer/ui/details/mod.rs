mod view;

pub use view::CustomerDetails;
