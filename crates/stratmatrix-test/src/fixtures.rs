//! Sample records and CSV documents.

use stratmatrix_core::{Rating, Record, RecordSet};

/// CSV export of [`sample_records`].
pub const SAMPLE_CSV: &str = "\
Name,Actionability,Feasibility,Business Value
AI Chatbot,High,High,Medium
Predictive Maintenance,Medium,Low,High
Document Analysis,Low,Medium,Low
";

/// Builds a record from rating literals.
///
/// # Panics
///
/// Panics if any literal is not a valid rating.
pub fn record(name: &str, actionability: &str, feasibility: &str, business_value: &str) -> Record {
    let parse = |s: &str| s.parse::<Rating>().expect("valid rating literal");
    Record::new(
        name,
        parse(actionability),
        parse(feasibility),
        parse(business_value),
    )
}

/// Three use cases covering Priority and Backlog.
pub fn sample_records() -> RecordSet {
    vec![
        record("AI Chatbot", "High", "High", "Medium"),
        record("Predictive Maintenance", "Medium", "Low", "High"),
        record("Document Analysis", "Low", "Medium", "Low"),
    ]
    .into()
}

/// Records that all share the same ratings, so they crowd one grid cell
/// when jitter is disabled.
pub fn coincident_records(count: usize) -> RecordSet {
    (0..count)
        .map(|i| record(&format!("Use Case {i}"), "High", "High", "High"))
        .collect()
}
