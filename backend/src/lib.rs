//! Domain and storage layers for the kindergarten customer dashboard.
//!
//! The presentation layer (charts, tables, modals) lives outside this crate
//! and consumes the `shared` schema types produced here.

pub mod domain;
pub mod storage;
