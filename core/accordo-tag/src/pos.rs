macro_rules! define_pos {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Word classes of the Italian tagger, as found in the derivational half of a tag.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PartOfSpeech {
            $($variant),+
        }

        impl PartOfSpeech {
            pub const ALL: &'static [PartOfSpeech] = &[$(PartOfSpeech::$variant),+];

            /// Exact-case lookup; multi-atom classes use `_` (`PRO_PERS`).
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(PartOfSpeech::$variant),)+
                    _ => None,
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(PartOfSpeech::$variant => $name),+
                }
            }
        }
    };
}

define_pos! {
    Abl => "ABL",
    Adj => "ADJ",
    Adv => "ADV",
    Art => "ART",
    ArtPre => "ARTPRE",
    Asp => "ASP",
    Aux => "AUX",
    Cau => "CAU",
    Ce => "CE",
    Ci => "CI",
    Con => "CON",
    DetDemo => "DET_DEMO",
    DetIndef => "DET_INDEF",
    DetNumCard => "DET_NUM_CARD",
    DetPoss => "DET_POSS",
    DetWh => "DET_WH",
    Int => "INT",
    Mod => "MOD",
    Ne => "NE",
    Noun => "NOUN",
    Pon => "PON",
    Pre => "PRE",
    ProDemo => "PRO_DEMO",
    ProIndef => "PRO_INDEF",
    ProNum => "PRO_NUM",
    ProPers => "PRO_PERS",
    ProPoss => "PRO_POSS",
    ProWh => "PRO_WH",
    Sent => "SENT",
    Si => "SI",
    Tale => "TALE",
    Ver => "VER",
    Wh => "WH",
    WhChe => "WH_CHE",
}

impl PartOfSpeech {
    /// Verbs, auxiliaries, modals, aspectuals and causatives.
    pub const VERB_CLASS: &'static [PartOfSpeech] = &[
        PartOfSpeech::Ver,
        PartOfSpeech::Aux,
        PartOfSpeech::Mod,
        PartOfSpeech::Asp,
        PartOfSpeech::Cau,
    ];

    pub fn is_verb_class(self) -> bool {
        Self::VERB_CLASS.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_case() {
        assert_eq!(PartOfSpeech::from_name("PRO_PERS"), Some(PartOfSpeech::ProPers));
        assert_eq!(PartOfSpeech::from_name("pro_pers"), None);
        assert_eq!(PartOfSpeech::from_name("PRO-PERS"), None);
    }

    #[test]
    fn names_round_trip() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(PartOfSpeech::from_name(pos.name()), Some(*pos));
        }
    }
}
