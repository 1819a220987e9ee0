//! # CSV Storage Module
//!
//! File-based exchange format for customer batches. Imported spreadsheet
//! exports are parsed permissively into the shared schema, and generated
//! batches can be written back out in the same shape.
//!
//! ## File Format
//!
//! ```csv
//! id,name,region,suburb,address,phone,email,website,category,rating,capacity,approved_date,status,source_channel,tags,last_contact_date,notes
//! AU-000001,Little Bondi Academy,NSW,Bondi,"312 Park Street, Bondi, NSW",02 5550 1234,littlebondiacademy4@gmail.com,,Long Day Care,Meeting,64,2011-05-14,contacted,Referral,Montessori;Reggio,2024-02-11,
//! ```
//!
//! Parsing substitutes documented per-field defaults instead of rejecting
//! records, so one unrecognized value never loses a batch.

pub mod kindergarten_repository;

pub use kindergarten_repository::KindergartenRepository;
