use accordo_morph::{SynthesisError, Synthesizer};
use accordo_tag::Reading;

use crate::suggest::suggest;

/// Two reading sets that must share at least one compatible interpretation.
/// The controlling side may be synthetic, e.g. the composite reading of a
/// coordinated subject.
#[derive(Debug, Clone)]
pub struct AgreementPair {
    pub controlling: Vec<Reading>,
    pub controlled: Vec<Reading>,
}

impl AgreementPair {
    pub fn new(controlling: Vec<Reading>, controlled: Vec<Reading>) -> Self {
        Self {
            controlling,
            controlled,
        }
    }

    /// Any controlled reading agreeing with any controlling one. A side with no
    /// readings constrains nothing.
    pub fn agrees(&self) -> bool {
        if self.controlling.is_empty() || self.controlled.is_empty() {
            return true;
        }
        self.controlled
            .iter()
            .any(|child| self.controlling.iter().any(|parent| child.agrees_with(parent)))
    }

    pub fn suggestions(&self, synth: &dyn Synthesizer) -> Result<Vec<String>, SynthesisError> {
        suggest(&self.controlling, &self.controlled, synth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accordo_tag::{Gender, Number};
    use proptest::prelude::*;

    #[test]
    fn one_compatible_reading_is_enough() {
        // "la" is either an article or a clitic pronoun.
        let pair = AgreementPair::new(
            vec![Reading::new("casa", "NOUN-F:s")],
            vec![Reading::new("il", "ART-M:p"), Reading::new("la", "PRO-PERS-CLI-3-F-S")],
        );
        assert!(pair.agrees());
    }

    #[test]
    fn no_compatible_reading() {
        let pair = AgreementPair::new(
            vec![Reading::synthetic(Gender::Masculine, Number::Singular)],
            vec![Reading::new("comprare", "VER:part+past+s+f")],
        );
        assert!(!pair.agrees());
    }

    #[test]
    fn empty_sides_constrain_nothing() {
        let pair = AgreementPair::new(Vec::new(), vec![Reading::new("comprare", "VER:part+past+s+f")]);
        assert!(pair.agrees());
    }

    fn reading() -> impl Strategy<Value = Reading> {
        let gender = prop_oneof![Just(Gender::Masculine), Just(Gender::Feminine)];
        let number = prop_oneof![Just(Number::Singular), Just(Number::Plural)];
        (gender, number).prop_map(|(gender, number)| Reading::synthetic(gender, number))
    }

    proptest! {
        #[test]
        fn agreement_does_not_depend_on_direction(
            controlling in prop::collection::vec(reading(), 1..4),
            controlled in prop::collection::vec(reading(), 1..4),
        ) {
            let forward = AgreementPair::new(controlling.clone(), controlled.clone());
            let backward = AgreementPair::new(controlled, controlling);
            prop_assert_eq!(forward.agrees(), backward.agrees());
        }

        #[test]
        fn a_reading_set_agrees_with_itself(readings in prop::collection::vec(reading(), 0..4)) {
            prop_assert!(AgreementPair::new(readings.clone(), readings).agrees());
        }
    }
}
