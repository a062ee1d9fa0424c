pub mod lexicon;

pub use lexicon::{LexEntry, Lexicon, LexiconSynthesizer};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("synthesizer unavailable: {0}")]
    Unavailable(String),
    #[error("cannot synthesize {lemma:?} as {tag}: {reason}")]
    Failed {
        lemma: String,
        tag: String,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("invalid lexicon archive: {0}")]
    Invalid(String),
    #[error("failed to serialize lexicon: {0}")]
    Serialize(String),
}

/// Turns a lemma and a target tag back into surface forms.
///
/// An empty result means the inflection does not exist; `Err` means the
/// synthesizer itself could not answer.
pub trait Synthesizer {
    fn synthesize(&self, lemma: &str, tag: &str) -> Result<Vec<String>, SynthesisError>;
}

impl<S: Synthesizer + ?Sized> Synthesizer for &S {
    fn synthesize(&self, lemma: &str, tag: &str) -> Result<Vec<String>, SynthesisError> {
        (**self).synthesize(lemma, tag)
    }
}

impl<S: Synthesizer + ?Sized> Synthesizer for Box<S> {
    fn synthesize(&self, lemma: &str, tag: &str) -> Result<Vec<String>, SynthesisError> {
        (**self).synthesize(lemma, tag)
    }
}
