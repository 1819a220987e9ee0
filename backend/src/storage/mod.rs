//! Storage layer: the CSV exchange format for customer batches and the
//! YAML dashboard configuration file.

pub mod config;
pub mod csv;

pub use config::DashboardConfig;
pub use csv::KindergartenRepository;
