//! Core domain types
//!
//! Words, feedback masks and the rules derived from them. Everything here is
//! pure and free of I/O.

mod mask;
mod rule;
mod word;

pub use mask::{Feedback, Mask, MaskError};
pub use rule::Rule;
pub use word::{WORD_LENGTH, Word, WordError};
