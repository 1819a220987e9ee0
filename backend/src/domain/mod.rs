//! # Domain Module
//!
//! Core business logic for the kindergarten customer dashboard.
//!
//! ## Module Organization
//!
//! - **rng**: seeded pseudo-random stream and sampling primitives
//! - **generator**: deterministic synthetic customer batch generation
//! - **analytics**: region distribution, sales funnel, and metric reducers
//! - **customer_table**: filtering, search, and pagination for the table view
//!
//! All of it is pure, synchronous, storage-agnostic logic: a batch of
//! records goes in, schema types from the `shared` crate come out.

pub mod analytics;
pub mod customer_table;
pub mod generator;
pub mod rng;

pub use analytics::*;
pub use customer_table::*;
pub use generator::*;
pub use rng::*;
