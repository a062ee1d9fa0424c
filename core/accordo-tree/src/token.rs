use accordo_tag::{DependencyRelation, PartOfSpeech, Reading};

use crate::ids::TokenId;

/// Character offsets of a token in the sentence text, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero for an inverted span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node of the dependency tree.
#[derive(Debug, Clone)]
pub struct Token {
    pub form: String,
    pub span: Span,
    /// Simultaneous interpretations, never empty.
    pub readings: Vec<Reading>,
    pub relation: Option<DependencyRelation>,
    pub(crate) head: Option<TokenId>,
    pub(crate) children: Vec<TokenId>,
}

impl Token {
    /// `None` for the sentence root.
    pub fn head(&self) -> Option<TokenId> {
        self.head
    }

    /// Dependents in sentence order.
    pub fn children(&self) -> &[TokenId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.head.is_none()
    }

    pub fn has_relation(&self, relation: DependencyRelation) -> bool {
        self.relation == Some(relation)
    }

    pub fn has_pos(&self, pos: PartOfSpeech) -> bool {
        self.readings.iter().any(|reading| reading.is_pos(pos))
    }

    pub fn is_verb_class(&self) -> bool {
        self.readings
            .iter()
            .any(|reading| reading.pos().is_some_and(PartOfSpeech::is_verb_class))
    }

    /// True if any reading carries `lemma` (case-insensitive).
    pub fn has_lemma(&self, lemma: &str) -> bool {
        self.readings.iter().any(|reading| reading.has_lemma(lemma))
    }

    /// Readings whose word class is in `set`; every reading when `set` is empty.
    pub fn readings_in<'a>(&'a self, set: &'a [PartOfSpeech]) -> impl Iterator<Item = &'a Reading> + 'a {
        self.readings
            .iter()
            .filter(move |reading| set.is_empty() || reading.pos().is_some_and(|pos| set.contains(&pos)))
    }
}
