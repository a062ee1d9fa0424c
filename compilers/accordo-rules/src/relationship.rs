use accordo_morph::Synthesizer;
use accordo_tag::{DependencyRelation, Number, PartOfSpeech, Reading};
use accordo_tree::{Sentence, Token, TokenId};
use log::{debug, trace};

use crate::pair::AgreementPair;
use crate::{has_avere_auxiliary, Rule, RuleError, RuleMatch};

/// Excuses a disagreeing `(child, parent)` pair.
pub type Exemption = fn(&Sentence, TokenId, TokenId) -> bool;

/// A head/dependent pair that has to agree. Empty word-class or relation sets
/// admit everything.
#[derive(Debug, Clone)]
pub struct AgreementRelationship {
    pub name: &'static str,
    pub description: &'static str,
    pub child_pos: &'static [PartOfSpeech],
    pub parent_pos: &'static [PartOfSpeech],
    pub relations: &'static [DependencyRelation],
    pub exemptions: Vec<Exemption>,
}

impl AgreementRelationship {
    pub fn subject_verb() -> Self {
        Self {
            name: "subject-verb",
            description: "The subject and verb do not agree.",
            child_pos: &[
                PartOfSpeech::Noun,
                PartOfSpeech::Art,
                PartOfSpeech::ProDemo,
                PartOfSpeech::ProIndef,
                PartOfSpeech::ProNum,
                PartOfSpeech::ProPers,
                PartOfSpeech::ProWh,
                PartOfSpeech::Wh,
                PartOfSpeech::WhChe,
            ],
            parent_pos: &[PartOfSpeech::Ver],
            relations: DependencyRelation::SUBJECT_FAMILY,
            exemptions: vec![coordinated_subject as Exemption, avere_auxiliary],
        }
    }

    pub fn noun_adjective() -> Self {
        Self {
            name: "noun-adjective",
            description: "The adjective and the noun it modifies do not agree.",
            child_pos: &[PartOfSpeech::Adj],
            parent_pos: &[PartOfSpeech::Noun],
            relations: &[DependencyRelation::Rmod],
            exemptions: Vec::new(),
        }
    }

    pub fn noun_determiner() -> Self {
        Self {
            name: "noun-determiner",
            description: "The determiner and the noun it modifies do not agree.",
            child_pos: &[PartOfSpeech::Noun],
            parent_pos: &[
                PartOfSpeech::DetDemo,
                PartOfSpeech::DetPoss,
                PartOfSpeech::DetWh,
                PartOfSpeech::DetIndef,
                PartOfSpeech::DetNumCard,
                PartOfSpeech::Art,
                PartOfSpeech::ArtPre,
            ],
            relations: &[DependencyRelation::Arg],
            exemptions: Vec::new(),
        }
    }

    /// No relation constraint: the parser labels auxiliaries inconsistently.
    pub fn modal_auxiliary() -> Self {
        Self {
            name: "modal-auxiliary",
            description: "The modal and auxiliary verbs do not agree.",
            child_pos: &[PartOfSpeech::Aux],
            parent_pos: &[PartOfSpeech::Mod],
            relations: &[],
            exemptions: vec![avere_auxiliary as Exemption],
        }
    }

    pub fn with_exemption(mut self, exemption: Exemption) -> Self {
        self.exemptions.push(exemption);
        self
    }

    pub fn child_readings(&self, token: &Token) -> Vec<Reading> {
        token.readings_in(self.child_pos).cloned().collect()
    }

    pub fn parent_readings(&self, token: &Token) -> Vec<Reading> {
        token.readings_in(self.parent_pos).cloned().collect()
    }

    /// An unset relation only passes an unconstrained relationship.
    pub fn admits_relation(&self, token: &Token) -> bool {
        self.relations.is_empty()
            || token.relation.is_some_and(|relation| self.relations.contains(&relation))
    }

    pub fn is_exempt(&self, sentence: &Sentence, child: TokenId, parent: TokenId) -> bool {
        self.exemptions.iter().any(|exemption| exemption(sentence, child, parent))
    }

    /// The pair `child` forms with its head under this relationship, if the
    /// relationship covers it at all.
    pub fn pair(&self, sentence: &Sentence, child: TokenId) -> Option<(TokenId, AgreementPair)> {
        let controlling = self.child_readings(&sentence[child]);
        if controlling.is_empty() {
            return None;
        }
        // The root has no agreement obligation.
        let parent = sentence.head(child)?;
        let controlled = self.parent_readings(&sentence[parent]);
        if controlled.is_empty() || !self.admits_relation(&sentence[child]) {
            return None;
        }
        Some((parent, AgreementPair::new(controlling, controlled)))
    }
}

/// A singular subject heading a coordination ("Maria e Luca") may take a
/// plural verb.
pub fn coordinated_subject(sentence: &Sentence, child: TokenId, _parent: TokenId) -> bool {
    let token = &sentence[child];
    if token.readings.iter().any(|reading| reading.number() == Some(Number::Plural)) {
        return false;
    }
    sentence
        .children(child)
        .iter()
        .any(|&dependent| sentence[dependent].has_relation(DependencyRelation::CoordBase))
}

/// Verbs under an "avere" auxiliary are checked by the participle rule.
pub fn avere_auxiliary(sentence: &Sentence, _child: TokenId, parent: TokenId) -> bool {
    has_avere_auxiliary(sentence, parent)
}

/// Runs a list of relationships over every token, reporting at the head.
#[derive(Debug, Clone)]
pub struct RelationshipRule {
    relationships: Vec<AgreementRelationship>,
}

impl RelationshipRule {
    pub const ID: &'static str = "IT_AGREEMENT";

    pub fn new(relationships: Vec<AgreementRelationship>) -> Self {
        Self { relationships }
    }

    /// Subject-verb, noun-adjective, noun-determiner and modal-auxiliary.
    pub fn standard() -> Self {
        Self::new(vec![
            AgreementRelationship::subject_verb(),
            AgreementRelationship::noun_adjective(),
            AgreementRelationship::noun_determiner(),
            AgreementRelationship::modal_auxiliary(),
        ])
    }

    pub fn relationships(&self) -> &[AgreementRelationship] {
        &self.relationships
    }
}

impl Rule for RelationshipRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Checks agreement between heads and their dependents: subjects and verbs, nouns and their adjectives and determiners, modals and auxiliaries."
    }

    fn check(&self, sentence: &Sentence, synth: &dyn Synthesizer) -> Result<Vec<RuleMatch>, RuleError> {
        let mut matches = Vec::new();
        for relationship in &self.relationships {
            for child in sentence.ids() {
                let Some((parent, pair)) = relationship.pair(sentence, child) else {
                    continue;
                };
                if pair.agrees() {
                    continue;
                }
                if relationship.is_exempt(sentence, child, parent) {
                    trace!(
                        "{}: {:?} -> {:?} exempt",
                        relationship.name,
                        sentence[child].form,
                        sentence[parent].form
                    );
                    continue;
                }

                let suggestions = pair.suggestions(synth)?;
                matches.push(RuleMatch::new(
                    Self::ID,
                    sentence[parent].span,
                    relationship.description,
                    suggestions,
                ));
            }
        }
        debug!("{}: {} matches", Self::ID, matches.len());
        Ok(matches)
    }
}
