//! Dictionaries of candidate words
//!
//! Provides the embedded default list and loaders for user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
