//! Shared test fixtures for StratMatrix crates.
//!
//! This crate provides data types and pure functions for testing.
//!
//! - [`fixtures`] - Sample records and CSV documents
//! - [`jitter`] - Deterministic jitter sources
//! - [`strategies`] - `proptest` strategies for ratings and records
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! stratmatrix-test = { workspace = true }
//! ```
//!
//! Because this crate depends on `stratmatrix-layout`, use it from
//! integration tests (`tests/`) of that crate rather than its unit tests.

pub mod fixtures;
pub mod jitter;
pub mod strategies;

// Re-export commonly used types at crate root for convenience
pub use fixtures::{record, sample_records, SAMPLE_CSV};
pub use jitter::{FixedJitter, ZeroJitter};
