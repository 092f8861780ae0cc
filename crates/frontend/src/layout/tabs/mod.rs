//! Tab management
//!
//! - `page`: wrapper showing the content of one tab
//! - `registry`: tab key to page component
//! - `tab_labels`: tab key to title

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
