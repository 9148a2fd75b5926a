//! Deriving rules from guess feedback

use crate::core::{Feedback, Mask, MaskError, Rule, Word, WordError};

/// Error type for a rejected `(word, mask)` pair
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Mask(#[from] MaskError),
}

/// Validate raw word and mask text, then derive the rules they imply
///
/// # Errors
/// Returns `GuessError` if the word or the mask is malformed. Nothing is
/// derived in that case.
///
/// # Examples
/// ```
/// use wordle_filter::core::Rule;
/// use wordle_filter::engine::derive_from_text;
///
/// let rules = derive_from_text("crane", "nneem").unwrap();
/// assert_eq!(rules[0], Rule::ExactPosition { letter: 'A', position: 2 });
/// assert!(derive_from_text("cran", "nneem").is_err());
/// ```
pub fn derive_from_text(word: &str, mask: &str) -> Result<Vec<Rule>, GuessError> {
    let word = Word::new(word.trim())?;
    let mask = Mask::parse(mask.trim())?;
    Ok(derive_rules(&word, &mask))
}

/// Derive the rules implied by a guessed word and its feedback mask
///
/// Exact-position rules come first (left to right), followed by one count rule
/// per distinct letter in order of first appearance:
/// - no `E`/`M` for the letter: `AbsentLetter`
/// - some `E`/`M` and at least one `N`: `ExactCount` (the gray copy caps the count)
/// - only `E`/`M`: `AtLeastCount`
#[must_use]
pub fn derive_rules(word: &Word, mask: &Mask) -> Vec<Rule> {
    let feedback = mask.feedback();

    let mut rules: Vec<Rule> = word
        .chars()
        .iter()
        .zip(feedback)
        .enumerate()
        .filter(|(_, (_, fb))| **fb == Feedback::Exact)
        .map(|(position, (&letter, _))| Rule::ExactPosition { letter, position })
        .collect();

    for letter in word.distinct_letters() {
        let letter_masks: Vec<Feedback> = word
            .positions_of(letter)
            .iter()
            .map(|&i| feedback[i])
            .collect();

        let matched = letter_masks.iter().filter(|fb| fb.is_match()).count();
        let has_absent = letter_masks.contains(&Feedback::Absent);

        let rule = match (matched, has_absent) {
            (0, _) => Rule::AbsentLetter { letter },
            (count, true) => Rule::ExactCount { letter, count },
            (count, false) => Rule::AtLeastCount { letter, count },
        };
        rules.push(rule);
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(word: &str, mask: &str) -> Vec<Rule> {
        derive_from_text(word, mask).unwrap()
    }

    #[test]
    fn crane_nneem() {
        let rules = derive("CRANE", "NNEEM");
        assert_eq!(
            rules,
            vec![
                Rule::ExactPosition {
                    letter: 'A',
                    position: 2
                },
                Rule::ExactPosition {
                    letter: 'N',
                    position: 3
                },
                Rule::AbsentLetter { letter: 'C' },
                Rule::AbsentLetter { letter: 'R' },
                Rule::AtLeastCount {
                    letter: 'A',
                    count: 1
                },
                Rule::AtLeastCount {
                    letter: 'N',
                    count: 1
                },
                Rule::AtLeastCount {
                    letter: 'E',
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn apple_nnemn_double_letter() {
        let rules = derive("APPLE", "NNEMN");
        assert_eq!(
            rules,
            vec![
                Rule::ExactPosition {
                    letter: 'P',
                    position: 2
                },
                Rule::AbsentLetter { letter: 'A' },
                Rule::ExactCount {
                    letter: 'P',
                    count: 1
                },
                Rule::AtLeastCount {
                    letter: 'L',
                    count: 1
                },
                Rule::AbsentLetter { letter: 'E' },
            ]
        );
    }

    #[test]
    fn doubled_letter_both_matched_is_at_least_two() {
        let rules = derive("speed", "nnmen");
        assert!(rules.contains(&Rule::AtLeastCount {
            letter: 'E',
            count: 2
        }));
        assert!(rules.contains(&Rule::ExactPosition {
            letter: 'E',
            position: 3
        }));
    }

    #[test]
    fn all_absent_letter_repeated_is_single_absent_rule() {
        let rules = derive("eerie", "nnnnn");
        assert_eq!(
            rules,
            vec![
                Rule::AbsentLetter { letter: 'E' },
                Rule::AbsentLetter { letter: 'R' },
                Rule::AbsentLetter { letter: 'I' },
            ]
        );
    }

    #[test]
    fn all_exact_has_no_absent_or_exact_count() {
        let rules = derive("crane", "eeeee");
        assert_eq!(
            rules
                .iter()
                .filter(|r| matches!(r, Rule::ExactPosition { .. }))
                .count(),
            5
        );
        assert!(
            rules
                .iter()
                .all(|r| matches!(r, Rule::ExactPosition { .. } | Rule::AtLeastCount { .. }))
        );
    }

    #[test]
    fn word_is_trimmed_and_uppercased() {
        assert_eq!(derive(" crane ", " nneem "), derive("CRANE", "NNEEM"));
    }

    #[test]
    fn rejects_bad_word() {
        assert_eq!(
            derive_from_text("cranes", "NNEEM"),
            Err(GuessError::Word(WordError::InvalidLength(6)))
        );
    }

    #[test]
    fn rejects_bad_mask() {
        assert_eq!(
            derive_from_text("crane", "NNEE"),
            Err(GuessError::Mask(MaskError::InvalidLength(4)))
        );
        assert_eq!(
            derive_from_text("crane", "NNEEY"),
            Err(GuessError::Mask(MaskError::InvalidCharacter('Y')))
        );
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = derive_from_text("cran", "NNEEM").unwrap_err();
        assert_eq!(err.to_string(), "word is not five letters (got 4)");

        let err = derive_from_text("crane", "NNEEX").unwrap_err();
        assert!(err.to_string().contains("invalid character 'X'"));
    }
}
