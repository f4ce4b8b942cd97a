//! Compilation options.

use rockstar_parser::Vocabulary;

/// What reading a never-assigned variable does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnboundPolicy {
    /// Reject the program with `UnboundVariable`.
    #[default]
    Error,
    /// Read the variable as `mysterious`.
    Mysterious,
}

/// Options for one compilation.
///
/// ```
/// use rockstar_compiler::{CompileOptions, UnboundPolicy};
///
/// let options = CompileOptions::new()
///     .with_unit_name("Greatest Hits")
///     .with_unbound_reads(UnboundPolicy::Mysterious);
/// assert_eq!(options.unit_name(), "Greatest Hits");
/// ```
#[derive(Debug, Clone)]
pub struct CompileOptions {
    unit_name: String,
    vocabulary: Vocabulary,
    unbound_reads: UnboundPolicy,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the generated unit that owns every storage slot.
    pub fn with_unit_name(mut self, name: impl Into<String>) -> Self {
        self.unit_name = name.into();
        self
    }

    /// Pronoun, prefix and keyword tables shared with the parser.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn with_unbound_reads(mut self, policy: UnboundPolicy) -> Self {
        self.unbound_reads = policy;
        self
    }

    pub fn unit_name(&self) -> &str {
        &self.unit_name
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn unbound_reads(&self) -> UnboundPolicy {
        self.unbound_reads
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            unit_name: "Rockstar".to_string(),
            vocabulary: Vocabulary::rockstar(),
            unbound_reads: UnboundPolicy::Error,
        }
    }
}
