//! Applying rule sets to word lists

use crate::core::{Rule, Word};

/// Keep the words that satisfy every rule
///
/// Rules are combined with logical AND; an empty rule slice keeps every word.
/// The output preserves the relative order of `words`.
///
/// # Examples
/// ```
/// use wordle_filter::core::{Rule, Word};
/// use wordle_filter::engine::apply_all;
///
/// let words: Vec<Word> = ["crane", "plane", "shale"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let rules = [Rule::AbsentLetter { letter: 'C' }];
///
/// let kept = apply_all(&words, &rules);
/// assert_eq!(kept.len(), 2);
/// assert_eq!(kept[0].text(), "PLANE");
/// ```
#[must_use]
pub fn apply_all<'a>(words: &'a [Word], rules: &[Rule]) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|word| rules.iter().all(|rule| rule.matches(word)))
        .collect()
}

/// Count the words that satisfy every rule without collecting them
#[must_use]
pub fn count_matching(words: &[Word], rules: &[Rule]) -> usize {
    words
        .iter()
        .filter(|word| rules.iter().all(|rule| rule.matches(word)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts(kept: &[&Word]) -> Vec<String> {
        kept.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn empty_rules_is_identity() {
        let list = words(&["crane", "plane", "shale"]);
        let kept = apply_all(&list, &[]);
        assert_eq!(texts(&kept), vec!["CRANE", "PLANE", "SHALE"]);
    }

    #[test]
    fn empty_words_yields_empty() {
        let kept = apply_all(&[], &[Rule::AbsentLetter { letter: 'A' }]);
        assert!(kept.is_empty());
    }

    #[test]
    fn rules_are_anded() {
        let list = words(&["crane", "plane", "shale", "slate"]);
        let rules = [
            Rule::ExactPosition {
                letter: 'A',
                position: 2,
            },
            Rule::AbsentLetter { letter: 'T' },
            Rule::AbsentLetter { letter: 'C' },
        ];
        let kept = apply_all(&list, &rules);
        assert_eq!(texts(&kept), vec!["PLANE", "SHALE"]);
    }

    #[test]
    fn order_is_preserved() {
        let list = words(&["shale", "plane", "crane"]);
        let kept = apply_all(&list, &[Rule::AbsentLetter { letter: 'C' }]);
        assert_eq!(texts(&kept), vec!["SHALE", "PLANE"]);
    }

    #[test]
    fn count_matches_apply() {
        let list = words(&["crane", "plane", "shale", "slate"]);
        let rules = [Rule::AtLeastCount {
            letter: 'L',
            count: 1,
        }];
        assert_eq!(count_matching(&list, &rules), apply_all(&list, &rules).len());
        assert_eq!(count_matching(&list, &rules), 3);
    }
}
