//! Wordle Filter
//!
//! An interactive Wordle assistant: enter each guess with its feedback mask and
//! see which dictionary words are still possible.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::core::Word;
//! use wordle_filter::engine::Session;
//!
//! let words: Vec<Word> = ["crane", "plane", "shale"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let mut session = Session::new(&words);
//! session.add_guess("crane", "NNEEM").unwrap();
//!
//! let remaining = session.candidates();
//! assert_eq!(remaining.len(), 1);
//! assert_eq!(remaining[0].text(), "PLANE");
//! ```

// Core domain types
pub mod core;

// Rule derivation and filtering
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
