//! Agreement across whole verb chains.
//!
//! A chain starts at a verb-class token whose head is not verb-class and runs
//! down through modals and auxiliaries to the main verb. Each level of the
//! chain holds the verbs found at that depth together with the auxiliaries
//! and object clitics that attach to them. The chain is checked against every
//! subject chain of its first verb, where coordinated subjects ("Maria e
//! Luca") count as one plural controller.

use std::collections::VecDeque;

use accordo_morph::Synthesizer;
use accordo_tag::{DependencyRelation, Gender, Number, PartOfSpeech, Reading};
use accordo_tree::{Sentence, TokenId};
use log::{debug, trace};

use crate::pair::AgreementPair;
use crate::{is_direct_object_pronoun, Rule, RuleError, RuleMatch, AVERE};

const VERB_OR_MODAL: &[PartOfSpeech] = &[PartOfSpeech::Ver, PartOfSpeech::Mod];

/// What a failed requirement was measured against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Controller {
    Subject(Vec<TokenId>),
    DirectObject(TokenId),
    MasculineSingular,
}

impl Controller {
    pub fn describe(&self, sentence: &Sentence) -> String {
        match self {
            Controller::Subject(members) => members
                .iter()
                .map(|&member| format!("\"{}\"", sentence[member].form))
                .collect::<Vec<_>>()
                .join(", "),
            Controller::DirectObject(pronoun) => format!("\"{}\"", sentence[*pronoun].form),
            Controller::MasculineSingular => "the masculine singular form".to_string(),
        }
    }
}

/// A subject and everything coordinated with it.
#[derive(Debug, Clone)]
pub struct SubjectChain {
    pub members: Vec<TokenId>,
    pub readings: Vec<Reading>,
    pub masculine: bool,
    pub plural: bool,
}

impl SubjectChain {
    /// The composite gender and number the chain imposes on its verbs.
    pub fn reading(&self) -> Reading {
        let gender = if self.masculine { Gender::Masculine } else { Gender::Feminine };
        let number = if self.plural { Number::Plural } else { Number::Singular };
        Reading::synthetic(gender, number)
    }
}

/// Tokens that begin a verb chain, in breadth-first order.
pub fn verb_chains(sentence: &Sentence) -> Vec<TokenId> {
    sentence
        .breadth_first()
        .into_iter()
        .filter(|&id| {
            sentence[id].is_verb_class()
                && !sentence.head(id).is_some_and(|head| sentence[head].is_verb_class())
        })
        .collect()
}

/// Subject chains hanging off `verb`. The first member needs a subject
/// relation, later members are reached through a coordination and need the
/// second-conjunct relation.
pub fn subject_chains(sentence: &Sentence, verb: TokenId) -> Vec<SubjectChain> {
    let mut chains = Vec::new();
    for &first in sentence.children(verb) {
        let mut queue = VecDeque::from([first]);
        let mut members = Vec::new();
        let mut readings = Vec::new();
        let mut gendered = false;
        let mut masculine = false;
        let mut plural = false;

        while let Some(candidate) = queue.pop_front() {
            let token = &sentence[candidate];
            let admitted = if candidate == first {
                token.relation.is_some_and(DependencyRelation::is_subject)
            } else {
                token.has_relation(DependencyRelation::Coord2ndBase)
            };
            if !admitted {
                continue;
            }

            for reading in &token.readings {
                if let Some(gender) = reading.gender() {
                    gendered = true;
                    masculine |= gender == Gender::Masculine;
                }
                plural |= reading.number() == Some(Number::Plural);
            }
            readings.extend(token.readings.iter().cloned());
            members.push(candidate);

            for &dependent in token.children() {
                if sentence[dependent].has_relation(DependencyRelation::CoordBase) {
                    queue.extend(sentence.children(dependent));
                }
            }
        }

        if members.is_empty() {
            continue;
        }
        trace!("subject chain {:?} of {:?}", members, sentence[verb].form);
        chains.push(SubjectChain {
            plural: plural || members.len() > 1,
            masculine: masculine || !gendered,
            members,
            readings,
        });
    }
    chains
}

/// Readings recorded at one depth of a verb chain, tagged with the token they
/// came from.
#[derive(Debug, Clone, Default)]
struct Level {
    verbs: Vec<(TokenId, Reading)>,
    avere: Vec<(TokenId, Reading)>,
    other_aux: Vec<(TokenId, Reading)>,
    direct_objects: Vec<(TokenId, Reading)>,
}

fn tagged<'a>(
    id: TokenId,
    readings: impl Iterator<Item = &'a Reading> + 'a,
) -> impl Iterator<Item = (TokenId, Reading)> + 'a {
    readings.map(move |reading| (id, reading.clone()))
}

fn readings_of(entries: &[(TokenId, Reading)]) -> Vec<Reading> {
    entries.iter().map(|(_, reading)| reading.clone()).collect()
}

/// Walks the chain under `verb` one depth at a time. Auxiliaries and object
/// clitics belong to the level of the verb they attach to; only verbs and
/// modals pass their dependents on to the next depth.
fn levels(sentence: &Sentence, verb: TokenId) -> Vec<Level> {
    let mut levels: Vec<Level> = Vec::new();
    let mut participants = vec![verb];

    while !participants.is_empty() {
        let depth = levels.len();
        levels.push(Level::default());
        let mut next = Vec::new();

        for participant in participants {
            let token = &sentence[participant];
            if depth > 0 {
                let owner = &mut levels[depth - 1];
                if token.has_relation(DependencyRelation::Obj) {
                    // A clitic after an "avere" auxiliary does not control the participle.
                    if owner.avere.is_empty() && is_direct_object_pronoun(&token.form) {
                        owner.direct_objects.extend(tagged(participant, token.readings.iter()));
                    }
                    continue;
                }
                if sentence.head(participant).is_some_and(|head| participant < head) {
                    let auxiliaries: Vec<_> = tagged(participant, token.readings_in(&[PartOfSpeech::Aux])).collect();
                    if auxiliaries.iter().any(|(_, reading)| reading.has_lemma(AVERE)) {
                        owner.avere.extend(auxiliaries);
                    } else {
                        owner.other_aux.extend(auxiliaries);
                    }
                    continue;
                }
            }

            let level = &mut levels[depth];
            let before = level.verbs.len();
            level.verbs.extend(tagged(participant, token.readings_in(VERB_OR_MODAL)));
            if level.verbs.len() > before {
                next.extend_from_slice(sentence.children(participant));
            }
        }
        participants = next;
    }

    let depth = levels.iter().take_while(|level| !level.verbs.is_empty()).count();
    levels.truncate(depth);
    levels
}

/// One thing that has to agree with one controller.
#[derive(Debug, Clone)]
struct Requirement {
    controller: Controller,
    controlling: Vec<Reading>,
    controlled: Vec<(TokenId, Reading)>,
}

fn requirements(levels: &[Level], subjects: &[SubjectChain]) -> Vec<Requirement> {
    let mut requirements = Vec::new();
    let Some(deepest) = levels.len().checked_sub(1) else {
        return requirements;
    };

    // The deepest level holds the main verb; a longer chain opens with a modal.
    let mut targets = vec![(deepest, PartOfSpeech::Ver)];
    if deepest > 0 {
        targets.push((0, PartOfSpeech::Mod));
    }

    let mut require = |controller: Controller, controlling: Vec<Reading>, controlled: Vec<(TokenId, Reading)>| {
        if !controlled.is_empty() {
            requirements.push(Requirement {
                controller,
                controlling,
                controlled,
            });
        }
    };

    for (index, pos) in targets {
        let level = &levels[index];
        let verbs: Vec<_> = level.verbs.iter().filter(|(_, reading)| reading.is_pos(pos)).cloned().collect();

        if level.avere.is_empty() {
            for chain in subjects {
                let controller = Controller::Subject(chain.members.clone());
                require(controller.clone(), vec![chain.reading()], verbs.clone());
                require(controller, vec![chain.reading()], level.other_aux.clone());
            }
            continue;
        }

        // "avere" takes the subject; the participle takes the object clitic or
        // stays masculine singular.
        for chain in subjects {
            require(Controller::Subject(chain.members.clone()), vec![chain.reading()], level.avere.clone());
        }
        match level.direct_objects.first() {
            Some(&(pronoun, _)) => require(
                Controller::DirectObject(pronoun),
                readings_of(&level.direct_objects),
                verbs,
            ),
            None => require(
                Controller::MasculineSingular,
                vec![Reading::synthetic(Gender::Masculine, Number::Singular)],
                verbs,
            ),
        }
    }
    requirements
}

/// Checks subjects, auxiliaries, modals and participles of every verb chain
/// against each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbAgreementRule;

impl VerbAgreementRule {
    pub const ID: &'static str = "IT_VERB_AGREEMENT";

    fn check_chain(
        &self,
        sentence: &Sentence,
        verb: TokenId,
        synth: &dyn Synthesizer,
        matches: &mut Vec<RuleMatch>,
    ) -> Result<(), RuleError> {
        let subjects = subject_chains(sentence, verb);
        let levels = levels(sentence, verb);
        if levels.is_empty() {
            trace!("{:?} heads no verb readings", sentence[verb].form);
            return Ok(());
        }

        for requirement in requirements(&levels, &subjects) {
            let pair = AgreementPair::new(requirement.controlling, readings_of(&requirement.controlled));
            if pair.agrees() {
                continue;
            }
            let target = requirement.controlled[0].0;
            let message = format!(
                "\"{}\" does not agree with {}",
                sentence[target].form,
                requirement.controller.describe(sentence)
            );
            let suggestions = pair.suggestions(synth)?;
            matches.push(RuleMatch::new(Self::ID, sentence[target].span, message, suggestions));
        }
        Ok(())
    }
}

impl Rule for VerbAgreementRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Checks agreement (generally number and gender) between verbs, including modal and auxiliary verbs, and their subjects and direct object pronouns."
    }

    fn check(&self, sentence: &Sentence, synth: &dyn Synthesizer) -> Result<Vec<RuleMatch>, RuleError> {
        let mut matches = Vec::new();
        for verb in verb_chains(sentence) {
            self.check_chain(sentence, verb, synth, &mut matches)?;
        }
        debug!("{}: {} matches", Self::ID, matches.len());
        Ok(matches)
    }
}
