use alloc::borrow::Cow;
use alloc::string::String;

use crate::codec::{self, TagLayout};
use crate::feature::{FeatureKinds, Features, Gender, Number};
use crate::pos::PartOfSpeech;

/// One morphological interpretation of a token: lemma, word class and features.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    lemma: String,
    pos: Option<PartOfSpeech>,
    features: Features,
    layout: TagLayout,
    // The tag this reading was parsed from, dropped once the reading is changed.
    source: Option<String>,
}

impl Reading {
    pub fn new(lemma: impl Into<String>, tag: &str) -> Self {
        let parsed = codec::parse(tag);
        Self {
            lemma: lemma.into(),
            pos: parsed.pos,
            features: parsed.features,
            layout: parsed.layout,
            source: Some(tag.into()),
        }
    }

    /// A bare noun reading carrying only gender and number, used as a stand-in
    /// controller (`NOUN-M:s`, `NOUN-F:p`).
    pub fn synthetic(gender: Gender, number: Number) -> Self {
        let gender = if gender == Gender::Masculine { "M" } else { "F" };
        let number = number.atom();
        let mut tag = String::with_capacity(8);
        tag.push_str("NOUN-");
        tag.push_str(gender);
        tag.push(codec::HALF_SEPARATOR);
        tag.push_str(number);
        Self::new("", &tag)
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn pos(&self) -> Option<PartOfSpeech> {
        self.pos
    }

    pub fn is_pos(&self, pos: PartOfSpeech) -> bool {
        self.pos == Some(pos)
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn kinds(&self) -> FeatureKinds {
        self.features.kinds()
    }

    pub fn gender(&self) -> Option<Gender> {
        self.features.gender
    }

    pub fn number(&self) -> Option<Number> {
        self.features.number
    }

    pub fn has_lemma(&self, lemma: &str) -> bool {
        self.lemma.eq_ignore_ascii_case(lemma)
    }

    /// The tag string: the original one while unchanged, regenerated otherwise.
    pub fn tag(&self) -> Cow<'_, str> {
        match &self.source {
            Some(source) => Cow::Borrowed(source),
            None => Cow::Owned(self.render_tag()),
        }
    }

    /// Regenerates the tag from the recorded layout, ignoring the cached source.
    pub fn render_tag(&self) -> String {
        codec::generate(self.pos, &self.features, &self.layout)
    }

    pub fn agrees_with(&self, other: &Reading) -> bool {
        self.features.agrees_with(&other.features)
    }

    /// Copies every feature both readings carry from `source` onto `self`.
    pub fn match_overlapping_features(&mut self, source: &Reading) {
        self.features.overlay(&source.features);
        self.source = None;
    }
}
