pub mod aggregate;

pub use aggregate::{Equipment, Incident, Maintenance, Vehicle};
