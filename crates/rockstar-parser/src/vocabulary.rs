//! Word tables of the Rockstar grammar.
//!
//! The parser and the compiler's name normalizer must agree on which words
//! are pronouns, which start a common variable, and which are reserved, so
//! both read them from one [`Vocabulary`]. All lookups are ASCII
//! case-insensitive.

use rustc_hash::FxHashSet;

const PRONOUNS: &[&str] = &[
    "it", "he", "she", "him", "her", "they", "them", "ze", "hir", "zie", "zir", "xe", "xem", "ve",
    "ver",
];

const COMMON_PREFIXES: &[&str] = &["a", "an", "the", "my", "your", "our"];

const KEYWORDS: &[&str] = &[
    // statements
    "put", "into", "let", "be", "say", "says", "said", "shout", "whisper", "scream", "build", "up",
    "knock", "down",
    // assignment and comparison
    "is", "are", "was", "were", "isn't", "isnt", "ain't", "aint", "not", "than", "as",
    // arithmetic
    "plus", "with", "minus", "without", "times", "of", "over", "between",
    // logic
    "and", "or", "nor",
];

const TRUE_WORDS: &[&str] = &["true", "right", "yes", "ok"];
const FALSE_WORDS: &[&str] = &["false", "wrong", "no", "lies"];
const NULL_WORDS: &[&str] = &["null", "nothing", "nowhere", "nobody", "gone"];
const MYSTERIOUS_WORDS: &[&str] = &["mysterious"];
const EMPTY_STRING_WORDS: &[&str] = &["empty", "silent", "silence"];

/// A constant spelled as a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantWord {
    True,
    False,
    Null,
    Mysterious,
    EmptyString,
}

/// Pronoun, common-prefix and reserved word tables.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pronouns: FxHashSet<String>,
    common_prefixes: FxHashSet<String>,
    keywords: FxHashSet<String>,
}

impl Vocabulary {
    /// The standard Rockstar tables.
    pub fn rockstar() -> Self {
        Self {
            pronouns: to_set(PRONOUNS),
            common_prefixes: to_set(COMMON_PREFIXES),
            keywords: to_set(KEYWORDS),
        }
    }

    /// Add a pronoun. Returns `false` if it was already known.
    pub fn add_pronoun(&mut self, word: &str) -> bool {
        self.pronouns.insert(word.to_ascii_lowercase())
    }

    /// Add a common-variable prefix such as `"their"`.
    pub fn add_common_prefix(&mut self, word: &str) -> bool {
        self.common_prefixes.insert(word.to_ascii_lowercase())
    }

    /// Reserve an extra keyword.
    pub fn add_keyword(&mut self, word: &str) -> bool {
        self.keywords.insert(word.to_ascii_lowercase())
    }

    pub fn is_pronoun(&self, word: &str) -> bool {
        self.pronouns.contains(&word.to_ascii_lowercase())
    }

    pub fn is_common_prefix(&self, word: &str) -> bool {
        self.common_prefixes.contains(&word.to_ascii_lowercase())
    }

    /// Grammar keywords and constant words.
    pub fn is_keyword(&self, word: &str) -> bool {
        let lower = word.to_ascii_lowercase();
        self.keywords.contains(&lower) || constant_word(&lower).is_some()
    }

    /// Any word that can never be part of a proper or simple variable name.
    pub fn is_reserved(&self, word: &str) -> bool {
        let lower = word.to_ascii_lowercase();
        self.keywords.contains(&lower)
            || self.pronouns.contains(&lower)
            || self.common_prefixes.contains(&lower)
            || constant_word(&lower).is_some()
    }

    /// The constant a word spells, if any.
    pub fn constant(&self, word: &str) -> Option<ConstantWord> {
        constant_word(&word.to_ascii_lowercase())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::rockstar()
    }
}

fn to_set(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn constant_word(lower: &str) -> Option<ConstantWord> {
    if TRUE_WORDS.contains(&lower) {
        Some(ConstantWord::True)
    } else if FALSE_WORDS.contains(&lower) {
        Some(ConstantWord::False)
    } else if NULL_WORDS.contains(&lower) {
        Some(ConstantWord::Null)
    } else if MYSTERIOUS_WORDS.contains(&lower) {
        Some(ConstantWord::Mysterious)
    } else if EMPTY_STRING_WORDS.contains(&lower) {
        Some(ConstantWord::EmptyString)
    } else {
        None
    }
}
