//! Rule engine
//!
//! Derives rules from guess feedback, keeps them in a session-owned
//! [`RuleSet`] and filters the dictionary with them.

mod derive;
mod filter;
mod rule_set;
mod session;

pub use derive::{GuessError, derive_from_text, derive_rules};
pub use filter::{apply_all, count_matching};
pub use rule_set::RuleSet;
pub use session::Session;
