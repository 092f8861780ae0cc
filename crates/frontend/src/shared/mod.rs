pub mod api_utils;
pub mod components;
pub mod crud;
pub mod date_utils;
pub mod details;
pub mod download;
pub mod form;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod loader;
pub mod modal;
pub mod toast;
