//! Variable identity: the name normalizer and the pronoun history.
//!
//! Rockstar lets one variable be written several ways. The normalizer maps
//! every spelling to one canonical, lowercase name:
//!
//! | shape   | example           | canonical name      |
//! |---------|-------------------|---------------------|
//! | pronoun | `it`              | the last variable   |
//! | common  | `My Thing`        | `my thing`          |
//! | proper  | `Doctor FeelGOOD` | `doctor feelgood`   |
//! | simple  | `TIME`            | `time`              |
//!
//! Every non-pronoun reference becomes the new referent of later pronouns.

use std::fmt;
use std::hash::{Hash, Hasher};

use rockstar_core::{CompileError, Span};
use rockstar_parser::Vocabulary;

/// How the surface text of a reference was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Simple,
    Common,
    Proper,
    Pronoun,
}

/// Canonical identity of a variable.
///
/// Two identities are equal when their canonical names are; the kind is
/// kept for diagnostics only.
#[derive(Debug, Clone)]
pub struct VariableIdentity {
    canonical_name: String,
    kind: VariableKind,
}

impl VariableIdentity {
    pub fn new(canonical_name: impl Into<String>, kind: VariableKind) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            kind,
        }
    }

    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }
}

impl PartialEq for VariableIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_name == other.canonical_name
    }
}

impl Eq for VariableIdentity {}

impl Hash for VariableIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_name.hash(state);
    }
}

impl fmt::Display for VariableIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name)
    }
}

/// The most recently referenced variable of one compilation.
#[derive(Debug, Clone, Default)]
pub struct PronounHistory {
    last: Option<VariableIdentity>,
}

impl PronounHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `identity` the referent of later pronouns.
    pub fn track(&mut self, identity: VariableIdentity) {
        log::trace!("pronoun referent is now '{identity}'");
        self.last = Some(identity);
    }

    pub fn last(&self) -> Option<&VariableIdentity> {
        self.last.as_ref()
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Classifies variable references and builds their identities.
#[derive(Debug, Clone, Copy)]
pub struct NameNormalizer<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> NameNormalizer<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The naming shape of `text`, or `None` if it has none.
    pub fn classify(&self, text: &str) -> Option<VariableKind> {
        let words: Vec<&str> = text.split_whitespace().collect();
        match words.as_slice() {
            [word] if self.vocabulary.is_pronoun(word) => Some(VariableKind::Pronoun),
            [prefix, word] if self.vocabulary.is_common_prefix(prefix) && is_letters(word) => {
                Some(VariableKind::Common)
            }
            [_, _, ..] if words.iter().all(|w| self.is_proper_word(w)) => {
                Some(VariableKind::Proper)
            }
            [word] if is_letters(word) && !self.vocabulary.is_reserved(word) => {
                Some(VariableKind::Simple)
            }
            _ => None,
        }
    }

    /// Resolve a reference to its identity.
    ///
    /// A pronoun takes the identity of the last tracked variable and leaves
    /// the history alone; any other successful reference is tracked.
    pub fn normalize(
        &self,
        text: &str,
        span: Span,
        history: &mut PronounHistory,
    ) -> Result<VariableIdentity, CompileError> {
        let Some(kind) = self.classify(text) else {
            return Err(CompileError::MalformedVariableName {
                text: text.to_string(),
                span,
            });
        };

        if kind == VariableKind::Pronoun {
            return match history.last() {
                Some(last) => Ok(VariableIdentity::new(last.canonical_name(), kind)),
                None => Err(CompileError::UnresolvedPronoun {
                    pronoun: text.to_string(),
                    span,
                }),
            };
        }

        let canonical = text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        let identity = VariableIdentity::new(canonical, kind);
        history.track(identity.clone());
        Ok(identity)
    }

    fn is_proper_word(&self, word: &str) -> bool {
        word.chars().next().is_some_and(char::is_uppercase)
            && is_letters(word)
            && !self.vocabulary.is_reserved(word)
    }
}

fn is_letters(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> Result<String, CompileError> {
        let vocabulary = Vocabulary::rockstar();
        let mut history = PronounHistory::new();
        NameNormalizer::new(&vocabulary)
            .normalize(text, Span::default(), &mut history)
            .map(|id| id.canonical_name().to_string())
    }

    #[test]
    fn simple_names_ignore_case() {
        assert_eq!(normalize("variable").unwrap(), "variable");
        assert_eq!(normalize("TIME").unwrap(), "time");
        assert_eq!(normalize("tIMe").unwrap(), "time");
        assert_eq!(normalize("x").unwrap(), "x");
    }

    #[test]
    fn common_names_keep_their_prefix() {
        assert_eq!(normalize("my thing").unwrap(), "my thing");
        assert_eq!(normalize("My   balance").unwrap(), "my balance");
        assert_ne!(normalize("a boy").unwrap(), normalize("the boy").unwrap());
    }

    #[test]
    fn proper_names_ignore_inner_case() {
        assert_eq!(normalize("Doctor Feelgood").unwrap(), "doctor feelgood");
        assert_eq!(normalize("Doctor FeelGOOD").unwrap(), "doctor feelgood");
    }

    #[test]
    fn malformed_names() {
        for text in ["doctor Feelgood", "my big thing", "don't", "is", "Doctor Is", ""] {
            assert!(
                matches!(normalize(text), Err(CompileError::MalformedVariableName { .. })),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn classification() {
        let vocabulary = Vocabulary::rockstar();
        let normalizer = NameNormalizer::new(&vocabulary);
        assert_eq!(normalizer.classify("she"), Some(VariableKind::Pronoun));
        assert_eq!(normalizer.classify("The message"), Some(VariableKind::Common));
        assert_eq!(normalizer.classify("Johnny B Goode"), Some(VariableKind::Proper));
        assert_eq!(normalizer.classify("Rockstar"), Some(VariableKind::Simple));
        assert_eq!(normalizer.classify("rock star"), None);
    }

    #[test]
    fn pronoun_resolves_to_last_tracked() {
        let vocabulary = Vocabulary::rockstar();
        let normalizer = NameNormalizer::new(&vocabulary);
        let mut history = PronounHistory::new();

        normalizer.normalize("The message", Span::default(), &mut history).unwrap();
        let it = normalizer.normalize("it", Span::default(), &mut history).unwrap();
        assert_eq!(it.canonical_name(), "the message");
        assert_eq!(it.kind(), VariableKind::Pronoun);

        // resolving does not move the referent
        let again = normalizer.normalize("It", Span::default(), &mut history).unwrap();
        assert_eq!(again, it);
    }

    #[test]
    fn pronoun_without_history_fails() {
        assert!(matches!(normalize("it"), Err(CompileError::UnresolvedPronoun { .. })));
    }

    #[test]
    fn failures_do_not_track() {
        let vocabulary = Vocabulary::rockstar();
        let normalizer = NameNormalizer::new(&vocabulary);
        let mut history = PronounHistory::new();
        normalizer.normalize("x", Span::default(), &mut history).unwrap();
        assert!(normalizer.normalize("don't", Span::default(), &mut history).is_err());
        assert_eq!(history.last().map(VariableIdentity::canonical_name), Some("x"));
    }

    #[test]
    fn identity_ignores_kind() {
        let a = VariableIdentity::new("the message", VariableKind::Common);
        let b = VariableIdentity::new("the message", VariableKind::Pronoun);
        assert_eq!(a, b);
    }

    #[test]
    fn reset_clears_history() {
        let mut history = PronounHistory::new();
        history.track(VariableIdentity::new("x", VariableKind::Simple));
        history.reset();
        assert!(history.last().is_none());
    }
}
