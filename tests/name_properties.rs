//! Property tests for variable naming and storage.
//!
//! Run with: cargo test --test name_properties

use proptest::prelude::*;
use rockstar::{CompileOptions, Vocabulary};
use rockstar_compiler::{NameNormalizer, PronounHistory, StorageAllocator, VariableKind};
use rockstar_core::Span;

// =============================================================================
// Strategies
// =============================================================================

fn is_free(word: &str) -> bool {
    !Vocabulary::rockstar().is_reserved(word)
}

/// A lowercase word that is not a keyword, pronoun or prefix.
fn arb_word() -> impl Strategy<Value = String> {
    "[a-z]{1,10}".prop_filter("reserved word", |w| is_free(w))
}

/// `word` with each letter's case chosen by `mask`.
fn recase(word: &str, mask: &[bool]) -> String {
    word.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

fn arb_casing() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 1..10)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn normalize(text: &str, history: &mut PronounHistory) -> Option<String> {
    let vocabulary = Vocabulary::rockstar();
    NameNormalizer::new(&vocabulary)
        .normalize(text, Span::default(), history)
        .ok()
        .map(|id| id.canonical_name().to_string())
}

// =============================================================================
// Normalization
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every casing of a simple name has the same canonical name.
    #[test]
    fn simple_names_are_case_insensitive(word in arb_word(), a in arb_casing(), b in arb_casing()) {
        let mut history = PronounHistory::new();
        let first = normalize(&recase(&word, &a), &mut history);
        let second = normalize(&recase(&word, &b), &mut history);
        prop_assert_eq!(first.as_deref(), Some(word.as_str()));
        prop_assert_eq!(first, second);
    }

    /// Only the first letter of each proper word is significant for shape.
    #[test]
    fn proper_names_ignore_inner_case(
        first in arb_word(),
        last in arb_word(),
        casing in arb_casing(),
    ) {
        let plain = format!("{} {}", capitalize(&first), capitalize(&last));
        let shouted = format!("{} {}", capitalize(&first), capitalize(&recase(&last, &casing)));
        let mut history = PronounHistory::new();
        let expected = format!("{first} {last}");
        prop_assert_eq!(normalize(&plain, &mut history), Some(expected.clone()));
        prop_assert_eq!(normalize(&shouted, &mut history), Some(expected));
    }

    /// The prefix is part of a common variable's identity.
    #[test]
    fn common_prefix_is_significant(word in arb_word()) {
        let mut history = PronounHistory::new();
        let a = normalize(&format!("a {word}"), &mut history);
        let the = normalize(&format!("The {word}"), &mut history);
        prop_assert_eq!(a.clone(), Some(format!("a {word}")));
        prop_assert_eq!(the.clone(), Some(format!("the {word}")));
        prop_assert_ne!(a, the);
    }

    /// A pronoun names the last non-pronoun reference, however often used.
    #[test]
    fn pronouns_follow_the_last_reference(words in prop::collection::vec(arb_word(), 1..6)) {
        let vocabulary = Vocabulary::rockstar();
        let normalizer = NameNormalizer::new(&vocabulary);
        let mut history = PronounHistory::new();
        for word in &words {
            normalizer.normalize(word, Span::default(), &mut history).unwrap();
        }
        for pronoun in ["it", "She", "THEM"] {
            let identity = normalizer.normalize(pronoun, Span::default(), &mut history).unwrap();
            prop_assert_eq!(identity.kind(), VariableKind::Pronoun);
            prop_assert_eq!(identity.canonical_name(), words.last().unwrap().as_str());
        }
    }
}

// =============================================================================
// Storage
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Equal canonical names always get the same slot; distinct ones never do.
    #[test]
    fn slots_are_shared_by_name(names in prop::collection::vec(arb_word(), 1..20)) {
        let mut storage = StorageAllocator::new("Rockstar");
        let ids: Vec<_> = names
            .iter()
            .map(|n| storage.slot_for(n, None, Span::default()).unwrap())
            .collect();

        for (i, a) in names.iter().enumerate() {
            for (j, b) in names.iter().enumerate() {
                prop_assert_eq!(a == b, ids[i] == ids[j]);
            }
        }
        let mut distinct = names.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(storage.len(), distinct.len());
    }

    /// A number stored through one spelling reads back through another.
    #[test]
    fn store_then_load_round_trips(first in arb_word(), last in arb_word(), n in 0u32..1_000_000) {
        let name = format!("{} {}", capitalize(&first), capitalize(&last));
        let loud = name.to_uppercase();
        let source = format!("Put {n} into {name}\nShout {loud}");
        let mut out = Vec::new();
        rockstar::run_with(&source, &CompileOptions::new(), &mut out).unwrap();
        prop_assert_eq!(String::from_utf8(out).unwrap(), format!("{n}\n"));
    }
}
