use accordo_morph::Synthesizer;
use accordo_tag::{DependencyRelation, Gender, Number, PartOfSpeech, Reading};
use accordo_tree::{Sentence, TokenId};
use log::debug;

use crate::pair::AgreementPair;
use crate::{is_direct_object_pronoun, Rule, RuleError, RuleMatch, AVERE};

/// Past participles under "avere": they agree with a direct object clitic
/// ("le ho cucinate") and are masculine singular otherwise ("ho cucinato").
#[derive(Debug, Clone, Copy, Default)]
pub struct AvereAgreementRule;

impl AvereAgreementRule {
    pub const ID: &'static str = "IT_AVERE_AGREEMENT";

    pub const DIRECT_OBJECT_MESSAGE: &'static str = "The verb must agree with its direct object pronoun.";

    /// The first object clitic attached to `verb`.
    fn direct_object(sentence: &Sentence, verb: TokenId) -> Option<TokenId> {
        sentence.children(verb).iter().copied().find(|&child| {
            let token = &sentence[child];
            token.has_relation(DependencyRelation::Obj) && is_direct_object_pronoun(&token.form)
        })
    }

    fn check_auxiliary(
        &self,
        sentence: &Sentence,
        auxiliary: TokenId,
        synth: &dyn Synthesizer,
    ) -> Result<Option<RuleMatch>, RuleError> {
        let Some(verb) = sentence.head(auxiliary) else {
            return Ok(None);
        };
        let verb_readings: Vec<Reading> = sentence[verb].readings_in(&[PartOfSpeech::Ver]).cloned().collect();
        if verb_readings.is_empty() {
            return Ok(None);
        }

        let pronoun_readings: Vec<Reading> = Self::direct_object(sentence, verb)
            .map(|pronoun| sentence[pronoun].readings_in(&[PartOfSpeech::ProPers]).cloned().collect())
            .unwrap_or_default();

        let (pair, message) = if pronoun_readings.is_empty() {
            let message = format!(
                "The past participle verb {} is used with the avere auxiliary verb {} and without a direct object pronoun, meaning it must be masculine and singular.",
                sentence[verb].form, sentence[auxiliary].form
            );
            let default = Reading::synthetic(Gender::Masculine, Number::Singular);
            (AgreementPair::new(vec![default], verb_readings), message)
        } else {
            (
                AgreementPair::new(pronoun_readings, verb_readings),
                Self::DIRECT_OBJECT_MESSAGE.to_string(),
            )
        };

        if pair.agrees() {
            return Ok(None);
        }
        let suggestions = pair.suggestions(synth)?;
        Ok(Some(RuleMatch::new(Self::ID, sentence[verb].span, message, suggestions)))
    }
}

impl Rule for AvereAgreementRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Checks that past participles used with the auxiliary avere agree with their direct object pronoun, or are masculine singular without one."
    }

    fn check(&self, sentence: &Sentence, synth: &dyn Synthesizer) -> Result<Vec<RuleMatch>, RuleError> {
        let mut matches = Vec::new();
        for id in sentence.ids() {
            let token = &sentence[id];
            let is_auxiliary = token.relation.is_some_and(|relation| relation.is_auxiliary());
            if !is_auxiliary || !token.has_lemma(AVERE) {
                continue;
            }
            if let Some(found) = self.check_auxiliary(sentence, id, synth)? {
                matches.push(found);
            }
        }
        debug!("{}: {} matches", Self::ID, matches.len());
        Ok(matches)
    }
}
