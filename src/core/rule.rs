//! Filter rules
//!
//! A rule is one atomic constraint on candidate words, derived from guess
//! feedback. Each variant carries exactly the fields its predicate needs, so
//! an ill-formed rule (a position on a count rule, say) cannot be built.

use super::word::Word;
use std::fmt;

/// An immutable predicate over a five-letter word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The letter does not occur in the word
    AbsentLetter { letter: char },
    /// The letter occurs at least `count` times
    AtLeastCount { letter: char, count: usize },
    /// The letter occurs exactly `count` times
    ExactCount { letter: char, count: usize },
    /// The letter sits at the zero-based `position`
    ExactPosition { letter: char, position: usize },
}

impl Rule {
    /// The letter this rule constrains
    #[must_use]
    pub const fn letter(&self) -> char {
        match *self {
            Self::AbsentLetter { letter }
            | Self::AtLeastCount { letter, .. }
            | Self::ExactCount { letter, .. }
            | Self::ExactPosition { letter, .. } => letter,
        }
    }

    /// Check whether `word` satisfies this rule
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Rule, Word};
    ///
    /// let word = Word::new("plane").unwrap();
    /// assert!(Rule::ExactPosition { letter: 'A', position: 2 }.matches(&word));
    /// assert!(Rule::AbsentLetter { letter: 'C' }.matches(&word));
    /// assert!(!Rule::AtLeastCount { letter: 'E', count: 2 }.matches(&word));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        match *self {
            Self::AbsentLetter { letter } => !word.has_letter(letter),
            Self::AtLeastCount { letter, count } => word.count_of(letter) >= count,
            Self::ExactCount { letter, count } => word.count_of(letter) == count,
            Self::ExactPosition { letter, position } => word.char_at(position) == Some(letter),
        }
    }

    /// Human-readable statement of the constraint
    ///
    /// Positions are shown 1-based.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::AbsentLetter { letter } => write!(f, "No letter {letter}"),
            Self::AtLeastCount { letter, count } => {
                write!(f, "Letter {letter} occurs at least {count} {}", times(count))
            }
            Self::ExactCount { letter, count } => {
                write!(f, "Letter {letter} occurs exactly {count} {}", times(count))
            }
            Self::ExactPosition { letter, position } => {
                write!(f, "Letter {letter} is at position {}", position + 1)
            }
        }
    }
}

const fn times(count: usize) -> &'static str {
    if count == 1 { "time" } else { "times" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn absent_letter() {
        let rule = Rule::AbsentLetter { letter: 'C' };
        assert!(rule.matches(&word("plane")));
        assert!(!rule.matches(&word("crane")));
    }

    #[test]
    fn at_least_count() {
        let rule = Rule::AtLeastCount {
            letter: 'E',
            count: 2,
        };
        assert!(rule.matches(&word("speed")));
        assert!(rule.matches(&word("eerie")));
        assert!(!rule.matches(&word("crane")));
    }

    #[test]
    fn exact_count() {
        let rule = Rule::ExactCount {
            letter: 'P',
            count: 1,
        };
        assert!(rule.matches(&word("plane")));
        assert!(!rule.matches(&word("apple")));
        assert!(!rule.matches(&word("crane")));
    }

    #[test]
    fn exact_count_zero_behaves_like_absent() {
        let rule = Rule::ExactCount {
            letter: 'Z',
            count: 0,
        };
        assert!(rule.matches(&word("crane")));
        assert!(!rule.matches(&word("pizza")));
    }

    #[test]
    fn exact_position() {
        let rule = Rule::ExactPosition {
            letter: 'A',
            position: 2,
        };
        assert!(rule.matches(&word("crane")));
        assert!(rule.matches(&word("shale")));
        assert!(!rule.matches(&word("apple")));
    }

    #[test]
    fn exact_position_past_end_never_matches() {
        let rule = Rule::ExactPosition {
            letter: 'A',
            position: 7,
        };
        assert!(!rule.matches(&word("aaaaa")));
    }

    #[test]
    fn letter_accessor() {
        assert_eq!(Rule::AbsentLetter { letter: 'Q' }.letter(), 'Q');
        assert_eq!(
            Rule::ExactPosition {
                letter: 'A',
                position: 0
            }
            .letter(),
            'A'
        );
    }

    #[test]
    fn describe_each_kind() {
        assert_eq!(Rule::AbsentLetter { letter: 'C' }.describe(), "No letter C");
        assert_eq!(
            Rule::AtLeastCount {
                letter: 'E',
                count: 1
            }
            .describe(),
            "Letter E occurs at least 1 time"
        );
        assert_eq!(
            Rule::ExactCount {
                letter: 'P',
                count: 2
            }
            .describe(),
            "Letter P occurs exactly 2 times"
        );
        assert_eq!(
            Rule::ExactPosition {
                letter: 'A',
                position: 2
            }
            .describe(),
            "Letter A is at position 3"
        );
    }
}
