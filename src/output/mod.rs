//! Terminal output formatting
//!
//! Colored rendering of rules and candidate lists for the line-based modes.

pub mod display;
pub mod formatters;

pub use display::{
    write_added_rules, write_candidates, write_error, write_plain_candidates, write_rules,
    write_success,
};
pub use formatters::{CandidateSample, sample_candidates};
