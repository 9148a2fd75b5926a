//! Guess feedback masks
//!
//! A mask is the positional feedback for a guessed word, written as five
//! characters from the alphabet `{N, E, M}`:
//! - `N` = letter not in the answer (gray)
//! - `E` = letter in exactly this position (green)
//! - `M` = letter in the answer, somewhere else (yellow)

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// `N`: the letter does not occur (beyond the occurrences matched elsewhere)
    Absent,
    /// `E`: the letter is in exactly this position
    Exact,
    /// `M`: the letter occurs, but not in this position
    Misplaced,
}

impl Feedback {
    /// Parse a single mask character (case-insensitive)
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'N' => Some(Self::Absent),
            'E' => Some(Self::Exact),
            'M' => Some(Self::Misplaced),
            _ => None,
        }
    }

    /// The mask character for this feedback
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => 'N',
            Self::Exact => 'E',
            Self::Misplaced => 'M',
        }
    }

    /// Whether the letter was found in the answer (`E` or `M`)
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Exact | Self::Misplaced)
    }
}

/// Error type for invalid masks
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    #[error("mask is not five characters (got {0})")]
    InvalidLength(usize),

    #[error("mask contains an invalid character '{0}' (expected N, E or M)")]
    InvalidCharacter(char),
}

/// Positional feedback for a five-letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask([Feedback; WORD_LENGTH]);

impl Mask {
    /// All letters in place (`EEEEE`)
    pub const ALL_EXACT: Self = Self([Feedback::Exact; WORD_LENGTH]);

    /// Build a mask from per-position feedback
    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    /// Parse a mask such as `"NNEEM"`
    ///
    /// Input is case-insensitive and must be exactly five characters long.
    ///
    /// # Errors
    /// Returns `MaskError::InvalidLength` for the wrong number of characters and
    /// `MaskError::InvalidCharacter` for anything outside `{N, E, M}`.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Feedback, Mask};
    ///
    /// let mask = Mask::parse("nneem").unwrap();
    /// assert_eq!(mask.feedback()[2], Feedback::Exact);
    /// assert!(Mask::parse("NNEE").is_err());
    /// assert!(Mask::parse("NNEEX").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MaskError> {
        let chars: Vec<char> = s.chars().map(|c| c.to_ascii_uppercase()).collect();

        if chars.len() != WORD_LENGTH {
            return Err(MaskError::InvalidLength(chars.len()));
        }

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        for (slot, ch) in feedback.iter_mut().zip(chars) {
            *slot = Feedback::from_char(ch).ok_or(MaskError::InvalidCharacter(ch))?;
        }

        Ok(Self(feedback))
    }

    /// Per-position feedback
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is `E`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::ALL_EXACT
    }

    /// Calculate the mask shown when `guess` is played against `answer`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark misplaced letters while the pool still has that letter
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Mask, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("plane").unwrap();
    /// assert_eq!(Mask::score(&guess, &answer).to_string(), "NNEEE");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut available: rustc_hash::FxHashMap<char, usize> = answer
            .distinct_letters()
            .map(|letter| (letter, answer.count_of(letter)))
            .collect();

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Feedback::Exact;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Feedback::Exact {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = Feedback::Misplaced;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Convert the mask to emoji squares (`🟩🟨⬜`)
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|feedback| match feedback {
                Feedback::Exact => '🟩',
                Feedback::Misplaced => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Mask {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Mask::score(&guess, &answer).to_string()
    }

    #[test]
    fn mask_parse_valid() {
        let mask = Mask::parse("NNEEM").unwrap();
        assert_eq!(
            mask.feedback(),
            &[
                Feedback::Absent,
                Feedback::Absent,
                Feedback::Exact,
                Feedback::Exact,
                Feedback::Misplaced,
            ]
        );
        assert_eq!(Mask::parse("nneem").unwrap(), mask);
        assert_eq!(mask.to_string(), "NNEEM");
    }

    #[test]
    fn mask_parse_invalid_length() {
        assert_eq!(Mask::parse("NNEE"), Err(MaskError::InvalidLength(4)));
        assert_eq!(Mask::parse("NNEEMM"), Err(MaskError::InvalidLength(6)));
        assert_eq!(Mask::parse(""), Err(MaskError::InvalidLength(0)));
    }

    #[test]
    fn mask_parse_invalid_character() {
        assert_eq!(Mask::parse("NNEEX"), Err(MaskError::InvalidCharacter('X')));
        assert_eq!(Mask::parse("GY-GY"), Err(MaskError::InvalidCharacter('G')));
        assert_eq!(Mask::parse("nneex"), Err(MaskError::InvalidCharacter('X')));
    }

    #[test]
    fn mask_all_exact() {
        assert!(Mask::ALL_EXACT.is_solved());
        assert_eq!(Mask::ALL_EXACT.to_string(), "EEEEE");
        assert!(!Mask::parse("EEEEM").unwrap().is_solved());
    }

    #[test]
    fn mask_to_emoji() {
        let mask = Mask::parse("EMNEM").unwrap();
        assert_eq!(mask.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn score_exact_and_absent() {
        assert_eq!(score("crane", "plane"), "NNEEE");
        assert_eq!(score("crane", "crane"), "EEEEE");
        assert_eq!(score("abcde", "fghij"), "NNNNN");
    }

    #[test]
    fn score_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O misplaced, second O exact
        assert_eq!(score("robot", "floor"), "MMNEN");
        // SPEED vs ERASE: both E's misplaced, the answer has two
        assert_eq!(score("speed", "erase"), "MNMMN");
    }

    #[test]
    fn score_extra_duplicate_is_absent() {
        // APPLE vs PLANT: one P in the answer
        assert_eq!(score("apple", "plant"), "MMNMN");
    }
}
