use std::collections::HashMap;

use log::debug;
use rkyv::{AlignedVec, Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::{LexiconError, SynthesisError, Synthesizer};

/// One inflected form: `comprata` is `comprare` at `VER:part+past+s+f`.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexEntry {
    pub form: String,
    pub lemma: String,
    pub tag: String,
}

impl LexEntry {
    pub fn new(form: impl Into<String>, lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<LexEntry>,
}

impl Lexicon {
    /// Validates an rkyv blob and deserializes it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LexiconError> {
        // Archives must be read from aligned memory.
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);
        rkyv::from_bytes::<Lexicon>(&aligned)
            .map_err(|err| LexiconError::Invalid(format!("{:?}", err)))
    }

    pub fn to_bytes(&self) -> Result<AlignedVec, LexiconError> {
        rkyv::to_bytes::<_, 1024>(self).map_err(|err| LexiconError::Serialize(format!("{:?}", err)))
    }
}

/// Answers synthesis requests from a `(lemma, tag) -> forms` index.
#[derive(Debug, Clone, Default)]
pub struct LexiconSynthesizer {
    index: HashMap<String, HashMap<String, Vec<String>>>,
    entries: usize,
}

impl LexiconSynthesizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::from_entries(lexicon.entries)
    }

    pub fn from_entries(entries: impl IntoIterator<Item = LexEntry>) -> Self {
        let mut synth = Self::default();
        for entry in entries {
            synth.insert(entry);
        }
        debug!("lexicon synthesizer holds {} forms", synth.entries);
        synth
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LexiconError> {
        let lexicon = Lexicon::from_bytes(bytes)?;
        debug!("loaded lexicon version {}", lexicon.version);
        Ok(Self::new(lexicon))
    }

    pub fn insert(&mut self, entry: LexEntry) {
        let forms = self
            .index
            .entry(entry.lemma)
            .or_default()
            .entry(entry.tag)
            .or_default();
        if !forms.contains(&entry.form) {
            forms.push(entry.form);
            self.entries += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

impl Synthesizer for LexiconSynthesizer {
    fn synthesize(&self, lemma: &str, tag: &str) -> Result<Vec<String>, SynthesisError> {
        Ok(self
            .index
            .get(lemma)
            .and_then(|tags| tags.get(tag))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn comprare() -> Lexicon {
        Lexicon {
            version: 1,
            entries: vec![
                LexEntry::new("comprato", "comprare", "VER:part+past+s+m"),
                LexEntry::new("comprata", "comprare", "VER:part+past+s+f"),
                LexEntry::new("comprati", "comprare", "VER:part+past+p+m"),
                LexEntry::new("comprate", "comprare", "VER:part+past+p+f"),
            ],
        }
    }

    #[test]
    fn looks_up_forms() {
        let synth = LexiconSynthesizer::new(comprare());
        assert_eq!(synth.len(), 4);
        assert_eq!(
            synth.synthesize("comprare", "VER:part+past+s+m").unwrap(),
            vec!["comprato".to_string()]
        );
    }

    #[test]
    fn missing_inflections_are_empty() {
        let synth = LexiconSynthesizer::new(comprare());
        assert!(synth.synthesize("comprare", "VER:ind+pres+1+s").unwrap().is_empty());
        assert!(synth.synthesize("vendere", "VER:part+past+s+m").unwrap().is_empty());
    }

    #[test]
    fn duplicate_entries_collapse() {
        let mut entries = comprare().entries;
        entries.push(LexEntry::new("comprato", "comprare", "VER:part+past+s+m"));
        let synth = LexiconSynthesizer::from_entries(entries);
        assert_eq!(synth.len(), 4);
    }

    #[test]
    fn blob_round_trip() {
        let bytes = comprare().to_bytes().expect("Failed to serialize lexicon");
        let synth = LexiconSynthesizer::from_bytes(&bytes).expect("Failed to load lexicon");
        assert_eq!(
            synth.synthesize("comprare", "VER:part+past+p+f").unwrap(),
            vec!["comprate".to_string()]
        );
    }

    #[test]
    fn garbage_is_rejected() {
        let garbage = [0xffu8; 7];
        assert!(matches!(
            LexiconSynthesizer::from_bytes(&garbage),
            Err(LexiconError::Invalid(_))
        ));
    }

    proptest! {
        #[test]
        fn every_entry_is_found(lemma in "[a-z]{1,8}", tag in "[A-Z]{2,4}:[a-z+]{1,6}", form in "[a-z]{1,10}") {
            let synth = LexiconSynthesizer::from_entries([LexEntry::new(form.clone(), lemma.clone(), tag.clone())]);
            prop_assert_eq!(synth.synthesize(&lemma, &tag).unwrap(), vec![form]);
        }
    }
}
