use serde::{Deserialize, Serialize};

/// Which checks a [`Checker`](crate::Checker) runs. Missing keys keep their
/// default, so `{"avere": false}` only turns the participle rule off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub subject_verb: bool,
    pub noun_adjective: bool,
    pub noun_determiner: bool,
    pub modal_auxiliary: bool,
    pub avere: bool,
    pub verb_chain: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            subject_verb: true,
            noun_adjective: true,
            noun_determiner: true,
            modal_auxiliary: true,
            avere: true,
            verb_chain: true,
        }
    }
}
