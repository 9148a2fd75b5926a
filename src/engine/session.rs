//! Interactive filtering session

use super::derive::{GuessError, derive_from_text, derive_rules};
use super::filter::{apply_all, count_matching};
use super::rule_set::RuleSet;
use crate::core::{Mask, Rule, Word};
use tracing::debug;

/// One user's filtering session
///
/// Borrows the read-only dictionary and owns the rules entered so far.
pub struct Session<'a> {
    words: &'a [Word],
    rules: RuleSet,
}

impl<'a> Session<'a> {
    /// Start a session with no rules over `words`
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            rules: RuleSet::new(),
        }
    }

    /// Validate a guess and its mask, then append the derived rules
    ///
    /// Returns the rules that were added. On error the rule set is unchanged.
    ///
    /// # Errors
    /// Returns `GuessError` if the word is not five letters or the mask is not
    /// five characters from `{N, E, M}`.
    pub fn add_guess(&mut self, word: &str, mask: &str) -> Result<&[Rule], GuessError> {
        let derived = derive_from_text(word, mask).inspect_err(|err| {
            debug!(word, mask, error = %err, "rejected guess");
        })?;
        Ok(self.push_batch(derived))
    }

    /// Append the rules for an already validated word and mask
    pub fn add_feedback(&mut self, word: &Word, mask: &Mask) -> &[Rule] {
        self.push_batch(derive_rules(word, mask))
    }

    fn push_batch(&mut self, derived: Vec<Rule>) -> &[Rule] {
        let start = self.rules.len();
        self.rules.add(derived);
        debug!(
            added = self.rules.len() - start,
            total = self.rules.len(),
            "rules added"
        );
        &self.rules.rules()[start..]
    }

    /// Remove every rule
    pub fn clear(&mut self) {
        debug!(removed = self.rules.len(), "rules cleared");
        self.rules.clear();
    }

    /// Take back the most recent guess
    pub fn undo_last(&mut self) -> Option<Vec<Rule>> {
        let removed = self.rules.undo_last();
        if let Some(batch) = &removed {
            debug!(removed = batch.len(), "last guess undone");
        }
        removed
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    /// Dictionary words consistent with every rule, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        apply_all(self.words, self.rules.rules())
    }

    /// Count the candidates without collecting them
    #[must_use]
    pub fn count_candidates(&self) -> usize {
        count_matching(self.words, self.rules.rules())
    }
}
