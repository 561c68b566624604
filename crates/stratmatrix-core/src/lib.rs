//! StratMatrix Core - Core types for the use-case priority matrix
//!
//! This crate provides the fundamental abstractions for StratMatrix:
//! - Ratings and their ordinal rank encoding
//! - Use-case records and the ordered record set
//! - Quadrant classification and the fixed shading regions
//! - The error taxonomy shared by every other crate

pub mod error;
pub mod quadrant;
pub mod rating;
pub mod record;

#[cfg(test)]
mod record_tests;

pub use error::{MatrixError, Result};
pub use quadrant::{classify, Quadrant, QuadrantRegion, QUADRANT_BOUNDARY};
pub use rating::{decode, encode, Rating, RATING_LABELS};
pub use record::{Record, RecordSet};
