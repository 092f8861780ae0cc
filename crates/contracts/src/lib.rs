pub mod dashboards;
pub mod enums;
pub mod domain;
pub mod shared;
