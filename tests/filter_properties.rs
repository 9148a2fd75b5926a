use proptest::prelude::*;
use wordle_filter::core::{Mask, Rule, WORD_LENGTH, Word};
use wordle_filter::engine::{Session, apply_all, derive_rules};

// A small alphabet so that repeated letters are common
fn word() -> impl Strategy<Value = Word> {
    "[A-F]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn mask() -> impl Strategy<Value = Mask> {
    "[NEM]{5}".prop_map(|s| Mask::parse(&s).unwrap())
}

fn rules() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec((word(), mask()), 0..4).prop_map(|guesses| {
        guesses
            .iter()
            .flat_map(|(w, m)| derive_rules(w, m))
            .collect()
    })
}

fn dictionary() -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec(word(), 0..40)
}

fn index_of(words: &[Word], word: &Word) -> usize {
    words
        .iter()
        .position(|w| std::ptr::eq(w, word))
        .expect("filtered word must come from the input slice")
}

proptest! {
    #[test]
    fn filtered_is_ordered_subsequence(words in dictionary(), rules in rules()) {
        let kept = apply_all(&words, &rules);
        let indices: Vec<usize> = kept.iter().map(|w| index_of(&words, w)).collect();
        prop_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(kept.iter().all(|w| rules.iter().all(|r| r.matches(w))));
    }

    #[test]
    fn empty_rules_is_identity(words in dictionary()) {
        let kept = apply_all(&words, &[]);
        prop_assert_eq!(kept.len(), words.len());
        prop_assert!(kept.iter().zip(&words).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn rule_order_is_irrelevant(words in dictionary(), rules in rules()) {
        let mut reversed = rules.clone();
        reversed.reverse();
        prop_assert_eq!(apply_all(&words, &rules), apply_all(&words, &reversed));
    }

    #[test]
    fn filtering_is_idempotent(words in dictionary(), rules in rules()) {
        let once: Vec<Word> = apply_all(&words, &rules).into_iter().cloned().collect();
        let twice: Vec<Word> = apply_all(&once, &rules).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn all_exact_mask_keeps_the_word(w in word()) {
        let rules = derive_rules(&w, &Mask::ALL_EXACT);
        let exact = rules.iter().filter(|r| matches!(r, Rule::ExactPosition { .. })).count();
        prop_assert_eq!(exact, WORD_LENGTH);
        let only_exact_or_at_least = rules
            .iter()
            .all(|r| matches!(r, Rule::ExactPosition { .. } | Rule::AtLeastCount { .. }));
        prop_assert!(only_exact_or_at_least);

        let single = [w.clone()];
        let kept = apply_all(&single, &rules);
        prop_assert_eq!(kept, vec![&w]);
    }

    #[test]
    fn genuine_feedback_never_excludes_the_answer(guess in word(), answer in word()) {
        let mask = Mask::score(&guess, &answer);
        let rules = derive_rules(&guess, &mask);
        for rule in &rules {
            prop_assert!(rule.matches(&answer), "{} rejected {}", rule, answer);
        }
    }

    #[test]
    fn derived_rules_are_well_formed(w in word(), m in mask()) {
        let rules = derive_rules(&w, &m);
        let distinct = w.distinct_letters().count();
        let exact = m.feedback().iter().filter(|f| **f == wordle_filter::core::Feedback::Exact).count();
        prop_assert_eq!(rules.len(), exact + distinct);

        for rule in &rules {
            prop_assert!(w.has_letter(rule.letter()));
            match *rule {
                Rule::ExactPosition { letter, position } => {
                    prop_assert!(position < WORD_LENGTH);
                    prop_assert_eq!(w.char_at(position), Some(letter));
                }
                Rule::AtLeastCount { letter, count } | Rule::ExactCount { letter, count } => {
                    prop_assert!(count >= 1);
                    prop_assert!(count <= w.count_of(letter));
                }
                Rule::AbsentLetter { .. } => {}
            }
        }
    }

    #[test]
    fn malformed_input_never_mutates(
        first in word(),
        first_mask in mask(),
        bad_word in "[A-Z]{0,4}|[A-Z]{6,8}|[A-Z]{4}[0-9]",
        bad_mask in "[NEM]{0,4}|[NEM]{6,7}|[NEM]{4}[A-DF-LO-Z]",
    ) {
        let words = vec![first.clone()];
        let mut session = Session::new(&words);
        session.add_feedback(&first, &first_mask);
        let before = session.rules().clone();

        prop_assert!(session.add_guess(&bad_word, "NNNNN").is_err());
        prop_assert!(session.add_guess("CRANE", &bad_mask).is_err());
        prop_assert_eq!(session.rules(), &before);
    }
}
