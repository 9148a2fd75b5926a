//! One-shot filtering from command-line guesses

use crate::core::{Mask, Rule, Word};
use crate::engine::Session;
use anyhow::{Context, Result, bail};
use tracing::info;

/// Guesses to apply in a single run
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Each entry is `WORD:MASK`, or a bare `WORD` when `answer` is set
    pub guesses: Vec<String>,
    /// Score bare guesses against this answer instead of reading masks
    pub answer: Option<String>,
}

impl FilterConfig {
    #[must_use]
    pub fn new(guesses: Vec<String>) -> Self {
        Self {
            guesses,
            answer: None,
        }
    }

    #[must_use]
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }
}

/// One applied guess
#[derive(Debug, Clone)]
pub struct AppliedGuess {
    pub word: String,
    pub mask: String,
    pub rules: Vec<Rule>,
    pub candidates_after: usize,
}

/// Result of a filter run
#[derive(Debug, Clone)]
pub struct FilterResult<'a> {
    pub steps: Vec<AppliedGuess>,
    pub rules: Vec<Rule>,
    pub candidates: Vec<&'a Word>,
}

/// Apply every configured guess to the session and collect the candidates
///
/// Guesses are applied in order; the first malformed guess aborts the run.
///
/// # Errors
///
/// Returns an error if a guess is not `WORD:MASK` (or a bare word with
/// `--answer`), or if a word or mask fails validation.
pub fn run_filter<'a>(session: &mut Session<'a>, config: &FilterConfig) -> Result<FilterResult<'a>> {
    let answer = config
        .answer
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("invalid --answer")?;

    let mut steps = Vec::with_capacity(config.guesses.len());

    for spec in &config.guesses {
        let invalid = || format!("invalid guess '{spec}'");
        let (word, mask) = match (spec.split_once(':'), &answer) {
            (Some((word, mask)), _) => (
                Word::new(word.trim()).with_context(invalid)?,
                Mask::parse(mask.trim()).with_context(invalid)?,
            ),
            (None, Some(answer)) => {
                let guess = Word::new(spec.trim()).with_context(invalid)?;
                let mask = Mask::score(&guess, answer);
                (guess, mask)
            }
            (None, None) => bail!("guess '{spec}' must be WORD:MASK (or pass --answer)"),
        };

        let rules = session.add_feedback(&word, &mask).to_vec();
        let candidates_after = session.count_candidates();
        info!(word = %word, mask = %mask, candidates_after, "guess applied");

        steps.push(AppliedGuess {
            word: word.text().to_string(),
            mask: mask.to_string(),
            rules,
            candidates_after,
        });
    }

    Ok(FilterResult {
        steps,
        rules: session.rules().rules().to_vec(),
        candidates: session.candidates(),
    })
}
