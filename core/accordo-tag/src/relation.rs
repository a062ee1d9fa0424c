use alloc::string::String;

/// Characters the CoNLL-X interchange reserves inside relation labels.
pub const RESERVED_LABEL_CHARS: [char; 4] = ['*', '+', '%', '/'];

macro_rules! define_relations {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Dependency relation labels (TUT treebank) produced by the parser model.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum DependencyRelation {
            $($variant),+
        }

        impl DependencyRelation {
            pub const ALL: &'static [DependencyRelation] = &[$(DependencyRelation::$variant),+];

            /// Lookup of an already sanitized label.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(DependencyRelation::$variant),)+
                    _ => None,
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(DependencyRelation::$variant => $name),+
                }
            }
        }
    };
}

define_relations! {
    Apposition => "APPOSITION",
    Arg => "ARG",
    Aux => "AUX",
    AuxPassive => "AUX_PASSIVE",
    AuxProgressive => "AUX_PROGRESSIVE",
    AuxTense => "AUX_TENSE",
    CloseParenthetical => "CLOSE_PARENTHETICAL",
    Contin => "CONTIN",
    ContinDenom => "CONTIN_DENOM",
    ContinLocut => "CONTIN_LOCUT",
    Coord => "COORD",
    CoordAdvers => "COORD_ADVERS",
    CoordBase => "COORD_BASE",
    Coord2nd => "COORD2ND",
    Coord2ndAdvers => "COORD2ND_ADVERS",
    Coord2ndBase => "COORD2ND_BASE",
    Dependent => "DEPENDENT",
    End => "END",
    ExtraObj => "EXTRAOBJ",
    IndCompl => "INDCOMPL",
    IndObj => "INDOBJ",
    Obj => "OBJ",
    ObjLocut => "OBJ_LOCUT",
    ObjSubj => "OBJ_SUBJ",
    OpenParenthetical => "OPEN_PARENTHETICAL",
    PredCompl => "PREDCOMPL",
    PredComplObj => "PREDCOMPL_OBJ",
    PredComplSubj => "PREDCOMPL_SUBJ",
    Rmod => "RMOD",
    RmodRelcl => "RMOD_RELCL",
    RmodRelclReduc => "RMOD_RELCL_REDUC",
    Separator => "SEPARATOR",
    Subj => "SUBJ",
    SubjIndCompl => "SUBJ_INDCOMPL",
    SubjLocut => "SUBJ_LOCUT",
    SubjObj => "SUBJ_OBJ",
    SubjSubjImpers => "SUBJ_SUBJ_IMPERS",
    Top => "TOP",
    Visitor => "VISITOR",
}

impl DependencyRelation {
    /// Relations that mark the first element of a subject chain.
    pub const SUBJECT_FAMILY: &'static [DependencyRelation] = &[
        DependencyRelation::Subj,
        DependencyRelation::SubjObj,
        DependencyRelation::ObjSubj,
        DependencyRelation::PredComplObj,
    ];

    pub const AUXILIARIES: &'static [DependencyRelation] = &[
        DependencyRelation::Aux,
        DependencyRelation::AuxPassive,
        DependencyRelation::AuxProgressive,
        DependencyRelation::AuxTense,
    ];

    /// Sanitizes a raw parser label and looks it up. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::from_name(&sanitize_label(label))
    }

    pub fn is_auxiliary(self) -> bool {
        Self::AUXILIARIES.contains(&self)
    }

    pub fn is_subject(self) -> bool {
        Self::SUBJECT_FAMILY.contains(&self)
    }
}

/// Replaces every reserved character with `_` (`AUX+TENSE` -> `AUX_TENSE`).
pub fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| if RESERVED_LABEL_CHARS.contains(&c) { '_' } else { c })
        .collect()
}
