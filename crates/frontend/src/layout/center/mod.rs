pub mod tabs;

pub use tabs::TabBar;
