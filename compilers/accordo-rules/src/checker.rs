use accordo_morph::Synthesizer;
use accordo_tree::Sentence;
use log::debug;

use crate::relationship::{AgreementRelationship, RelationshipRule};
use crate::{AvereAgreementRule, CheckerConfig, Rule, RuleError, RuleMatch, VerbAgreementRule};

/// Runs a fixed set of rules over sentences with one synthesizer.
pub struct Checker<S: Synthesizer> {
    rules: Vec<Box<dyn Rule>>,
    synth: S,
}

impl<S: Synthesizer> Checker<S> {
    /// Every rule enabled.
    pub fn new(synth: S) -> Self {
        Self::from_config(&CheckerConfig::default(), synth)
    }

    pub fn from_config(config: &CheckerConfig, synth: S) -> Self {
        let mut relationships = Vec::new();
        if config.subject_verb {
            relationships.push(AgreementRelationship::subject_verb());
        }
        if config.noun_adjective {
            relationships.push(AgreementRelationship::noun_adjective());
        }
        if config.noun_determiner {
            relationships.push(AgreementRelationship::noun_determiner());
        }
        if config.modal_auxiliary {
            relationships.push(AgreementRelationship::modal_auxiliary());
        }

        let mut rules: Vec<Box<dyn Rule>> = Vec::new();
        if !relationships.is_empty() {
            rules.push(Box::new(RelationshipRule::new(relationships)));
        }
        if config.avere {
            rules.push(Box::new(AvereAgreementRule));
        }
        if config.verb_chain {
            rules.push(Box::new(VerbAgreementRule));
        }
        Self::with_rules(rules, synth)
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>, synth: S) -> Self {
        Self { rules, synth }
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn synthesizer(&self) -> &S {
        &self.synth
    }

    /// Matches of every rule, in rule order.
    pub fn check(&self, sentence: &Sentence) -> Result<Vec<RuleMatch>, RuleError> {
        let mut matches = Vec::new();
        for rule in &self.rules {
            matches.extend(rule.check(sentence, &self.synth)?);
        }
        debug!("{:?}: {} matches", sentence.text(), matches.len());
        Ok(matches)
    }
}
