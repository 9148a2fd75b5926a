//! Command implementations

pub mod filter;
pub mod simple;

pub use filter::{AppliedGuess, FilterConfig, FilterResult, run_filter};
pub use simple::{MenuChoice, run_simple};
