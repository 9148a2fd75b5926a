//! The session's accumulated rules

use crate::core::Rule;

/// Ordered collection of every rule entered so far
///
/// Rules are appended in batches (one batch per guess). Batches are
/// remembered so the latest guess can be taken back without touching the
/// rules that came before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    batch_starts: Vec<usize>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of rules
    ///
    /// An empty batch is ignored.
    pub fn add(&mut self, rules: impl IntoIterator<Item = Rule>) {
        let start = self.rules.len();
        self.rules.extend(rules);
        if self.rules.len() > start {
            self.batch_starts.push(start);
        }
    }

    /// Remove every rule
    pub fn clear(&mut self) {
        self.rules.clear();
        self.batch_starts.clear();
    }

    /// Remove the most recently added batch, returning it
    pub fn undo_last(&mut self) -> Option<Vec<Rule>> {
        let start = self.batch_starts.pop()?;
        Some(self.rules.split_off(start))
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of batches (guesses) currently held
    #[inline]
    #[must_use]
    pub fn batch_count(&self) -> usize {
        self.batch_starts.len()
    }

    /// Human-readable description of every rule, in insertion order
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        self.rules.iter().map(Rule::describe).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
