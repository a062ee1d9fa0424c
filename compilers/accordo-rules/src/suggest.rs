use accordo_morph::{SynthesisError, Synthesizer};
use accordo_tag::Reading;
use indexmap::IndexSet;
use log::trace;

/// Re-inflects each controlled reading with the features of each controlling
/// reading and collects the surface forms the synthesizer knows, first seen
/// first.
pub fn suggest(
    controlling: &[Reading],
    controlled: &[Reading],
    synth: &dyn Synthesizer,
) -> Result<Vec<String>, SynthesisError> {
    let mut forms = IndexSet::new();
    for source in controlling {
        for target in controlled {
            let mut suggestion = target.clone();
            suggestion.match_overlapping_features(source);
            let tag = suggestion.tag();
            let found = synth.synthesize(suggestion.lemma(), &tag)?;
            trace!("{} {} -> {:?}", suggestion.lemma(), tag, found);
            forms.extend(found);
        }
    }
    Ok(forms.into_iter().collect())
}
