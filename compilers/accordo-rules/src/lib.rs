//! Agreement rules over a parsed sentence: declarative head/dependent
//! relationships, past participles under "avere", and whole verb chains.

pub mod avere;
pub mod checker;
pub mod config;
pub mod pair;
pub mod relationship;
pub mod suggest;
pub mod verb_chain;

pub use avere::AvereAgreementRule;
pub use checker::Checker;
pub use config::CheckerConfig;
pub use pair::AgreementPair;
pub use relationship::{AgreementRelationship, Exemption, RelationshipRule};
pub use verb_chain::VerbAgreementRule;

use accordo_morph::{SynthesisError, Synthesizer};
use accordo_tree::{Sentence, Span, TokenId};
use serde::Serialize;
use thiserror::Error;

pub const AVERE: &str = "avere";

/// Object clitics that control participle agreement under "avere".
#[rustfmt::skip]
pub const DIRECT_OBJECT_PRONOUNS: &[&str] = &[
    "lo", "la", "li", "le", "l'",
    "melo", "mela", "meli", "mele",
    "telo", "tela", "teli", "tele",
    "selo", "sela", "seli", "sele",
    "glielo", "gliela", "glieli", "gliele", "gliel'",
    "celo", "cela", "celi", "cele",
    "velo", "vela", "veli", "vele",
];

pub fn is_direct_object_pronoun(form: &str) -> bool {
    let form = form.to_lowercase();
    DIRECT_OBJECT_PRONOUNS.contains(&form.as_str())
}

/// True if `token` has a dependent in an auxiliary relation whose lemma is
/// "avere".
pub fn has_avere_auxiliary(sentence: &Sentence, token: TokenId) -> bool {
    sentence.children(token).iter().any(|&child| {
        let child = &sentence[child];
        child.relation.is_some_and(|relation| relation.is_auxiliary()) && child.has_lemma(AVERE)
    })
}

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("suggestion synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

/// One reported violation: the character range to replace, why, and the
/// candidate replacements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    pub rule: &'static str,
    pub start: usize,
    pub end: usize,
    pub message: String,
    pub suggestions: Vec<String>,
}

impl RuleMatch {
    pub fn new(rule: &'static str, span: Span, message: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            rule,
            start: span.start,
            end: span.end,
            message: message.into(),
            suggestions,
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// A stateless check over one sentence. Matches are returned, never retained,
/// so one instance can serve any number of sentences.
pub trait Rule {
    fn id(&self) -> &'static str;

    fn description(&self) -> &str;

    fn check(&self, sentence: &Sentence, synth: &dyn Synthesizer) -> Result<Vec<RuleMatch>, RuleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_object_pronouns_ignore_case() {
        assert!(is_direct_object_pronoun("Le"));
        assert!(is_direct_object_pronoun("GLIEL'"));
        assert!(!is_direct_object_pronoun("ne"));
        assert!(!is_direct_object_pronoun("gli"));
    }

    #[test]
    fn matches_serialize_flat() {
        let found = RuleMatch::new("IT_VERB_AGREEMENT", Span::new(9, 17), "msg", vec!["comprato".into()]);
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json["rule"], "IT_VERB_AGREEMENT");
        assert_eq!(json["start"], 9);
        assert_eq!(json["end"], 17);
        assert_eq!(json["suggestions"][0], "comprato");
    }
}
