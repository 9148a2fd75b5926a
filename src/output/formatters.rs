//! Formatting utilities for terminal output

use crate::core::Word;
use rand::Rng;
use rand::seq::SliceRandom;

/// Candidates picked for display
///
/// Display order is random so a long list does not always start with the same
/// alphabetical run; the filter itself never reorders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSample<'a> {
    pub shown: Vec<&'a Word>,
    pub total: usize,
}

impl CandidateSample<'_> {
    /// Whether some candidates were left out
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total > self.shown.len()
    }
}

/// Shuffle the candidates and keep at most `limit` of them
pub fn sample_candidates<'a, R: Rng + ?Sized>(
    mut candidates: Vec<&'a Word>,
    limit: usize,
    rng: &mut R,
) -> CandidateSample<'a> {
    let total = candidates.len();
    candidates.shuffle(rng);
    candidates.truncate(limit);
    CandidateSample {
        shown: candidates,
        total,
    }
}

/// Create a progress bar string
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        (((value / max) * width as f64).max(0.0) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the dictionary is still in play
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn remaining_bar(remaining: usize, total: usize, width: usize) -> String {
    create_progress_bar(remaining as f64, total as f64, width)
}
