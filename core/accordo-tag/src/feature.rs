use bitflags::bitflags;

macro_rules! define_feature {
    ($name:ident, $doc:expr, { $($variant:ident => $atom:literal),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Case-insensitive lookup of a single tag atom.
            pub fn from_atom(atom: &str) -> Option<Self> {
                $(
                    if atom.eq_ignore_ascii_case($atom) {
                        return Some($name::$variant);
                    }
                )+
                None
            }

            /// Canonical (lowercase) spelling of the atom.
            pub const fn atom(self) -> &'static str {
                match self {
                    $($name::$variant => $atom),+
                }
            }
        }
    };
}

define_feature!(Gender, "Grammatical gender.", {
    Masculine => "m",
    Feminine => "f",
});

define_feature!(Number, "Grammatical number.", {
    Singular => "s",
    Plural => "p",
});

define_feature!(Person, "Grammatical person, written as a digit.", {
    First => "1",
    Second => "2",
    Third => "3",
});

define_feature!(Degree, "Degree of comparison for adjectives and adverbs.", {
    Positive => "pos",
    Comparative => "comp",
    Superlative => "sup",
});

define_feature!(Mood, "Verbal mood.", {
    Conditional => "cond",
    Gerund => "ger",
    Imperative => "impr",
    Indicative => "ind",
    Infinitive => "inf",
    Participle => "part",
    Subjunctive => "sub",
});

define_feature!(Tense, "Verbal tense.", {
    Present => "pres",
    Past => "past",
    Imperfect => "impf",
    Future => "fut",
});

define_feature!(Clitic, "Enclitic form fused onto a verb (\"dammelo\", \"vattene\").", {
    Cela => "cela",
    Cele => "cele",
    Celi => "celi",
    Celo => "celo",
    Cene => "cene",
    Ci => "ci",
    Gli => "gli",
    Gliela => "gliela",
    Gliele => "gliele",
    Glieli => "glieli",
    Glielo => "glielo",
    Gliene => "gliene",
    La => "la",
    Le => "le",
    Li => "li",
    Lo => "lo",
    Mela => "mela",
    Mele => "mele",
    Meli => "meli",
    Melo => "melo",
    Mene => "mene",
    Mi => "mi",
    Ne => "ne",
    Sela => "sela",
    Sele => "sele",
    Seli => "seli",
    Selo => "selo",
    Sene => "sene",
    Si => "si",
    Tela => "tela",
    Tele => "tele",
    Teli => "teli",
    Telo => "telo",
    Tene => "tene",
    Ti => "ti",
    Vela => "vela",
    Vele => "vele",
    Veli => "veli",
    Velo => "velo",
    Vene => "vene",
    Vi => "vi",
});

define_feature!(Cli, "Marker on clitic pronouns.", {
    Cli => "cli",
});

/// The eight feature kinds, in the priority order used when matching atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Gender,
    Number,
    Person,
    Degree,
    Mood,
    Tense,
    Clitic,
    Cli,
}

impl FeatureKind {
    pub const PRIORITY: [FeatureKind; 8] = [
        FeatureKind::Gender,
        FeatureKind::Number,
        FeatureKind::Person,
        FeatureKind::Degree,
        FeatureKind::Mood,
        FeatureKind::Tense,
        FeatureKind::Clitic,
        FeatureKind::Cli,
    ];

    pub const fn flag(self) -> FeatureKinds {
        match self {
            FeatureKind::Gender => FeatureKinds::GENDER,
            FeatureKind::Number => FeatureKinds::NUMBER,
            FeatureKind::Person => FeatureKinds::PERSON,
            FeatureKind::Degree => FeatureKinds::DEGREE,
            FeatureKind::Mood => FeatureKinds::MOOD,
            FeatureKind::Tense => FeatureKinds::TENSE,
            FeatureKind::Clitic => FeatureKinds::CLITIC,
            FeatureKind::Cli => FeatureKinds::CLI,
        }
    }
}

bitflags! {
    /// Which feature kinds a reading carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureKinds: u16 {
        const GENDER = 1;
        const NUMBER = 2;
        const PERSON = 4;
        const DEGREE = 8;
        const MOOD = 16;
        const TENSE = 32;
        const CLITIC = 64;
        const CLI = 128;
    }
}

/// The inflectional features of one reading. `None` means unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Features {
    pub gender: Option<Gender>,
    pub number: Option<Number>,
    pub person: Option<Person>,
    pub degree: Option<Degree>,
    pub mood: Option<Mood>,
    pub tense: Option<Tense>,
    pub clitic: Option<Clitic>,
    pub cli: Option<Cli>,
}

impl Features {
    pub fn kinds(&self) -> FeatureKinds {
        FeatureKind::PRIORITY
            .iter()
            .filter(|kind| self.atom(**kind).is_some())
            .fold(FeatureKinds::empty(), |acc, kind| acc | kind.flag())
    }

    pub fn has(&self, kind: FeatureKind) -> bool {
        self.atom(kind).is_some()
    }

    /// Canonical atom of the value held for `kind`, if any.
    pub fn atom(&self, kind: FeatureKind) -> Option<&'static str> {
        match kind {
            FeatureKind::Gender => self.gender.map(Gender::atom),
            FeatureKind::Number => self.number.map(Number::atom),
            FeatureKind::Person => self.person.map(Person::atom),
            FeatureKind::Degree => self.degree.map(Degree::atom),
            FeatureKind::Mood => self.mood.map(Mood::atom),
            FeatureKind::Tense => self.tense.map(Tense::atom),
            FeatureKind::Clitic => self.clitic.map(Clitic::atom),
            FeatureKind::Cli => self.cli.map(Cli::atom),
        }
    }

    /// Fills `kind` from `atom` if the kind is still unset and the atom names one
    /// of its values. Returns whether the atom was consumed.
    pub fn fill(&mut self, kind: FeatureKind, atom: &str) -> bool {
        fn put<T>(slot: &mut Option<T>, value: Option<T>) -> bool {
            if slot.is_some() {
                return false;
            }
            match value {
                Some(value) => {
                    *slot = Some(value);
                    true
                }
                None => false,
            }
        }

        match kind {
            FeatureKind::Gender => put(&mut self.gender, Gender::from_atom(atom)),
            FeatureKind::Number => put(&mut self.number, Number::from_atom(atom)),
            FeatureKind::Person => put(&mut self.person, Person::from_atom(atom)),
            FeatureKind::Degree => put(&mut self.degree, Degree::from_atom(atom)),
            FeatureKind::Mood => put(&mut self.mood, Mood::from_atom(atom)),
            FeatureKind::Tense => put(&mut self.tense, Tense::from_atom(atom)),
            FeatureKind::Clitic => put(&mut self.clitic, Clitic::from_atom(atom)),
            FeatureKind::Cli => put(&mut self.cli, Cli::from_atom(atom)),
        }
    }

    /// A feature agrees when either side lacks it or both hold the same value.
    /// The feature sets agree when all eight kinds agree.
    pub fn agrees_with(&self, other: &Features) -> bool {
        fn agree<T: PartialEq>(a: Option<T>, b: Option<T>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
        }

        agree(self.gender, other.gender)
            && agree(self.number, other.number)
            && agree(self.person, other.person)
            && agree(self.degree, other.degree)
            && agree(self.mood, other.mood)
            && agree(self.tense, other.tense)
            && agree(self.clitic, other.clitic)
            && agree(self.cli, other.cli)
    }

    /// Overwrites every kind present on both sides with the value from `source`.
    pub fn overlay(&mut self, source: &Features) {
        fn take<T: Copy>(target: &mut Option<T>, source: Option<T>) {
            if let (Some(target), Some(source)) = (target.as_mut(), source) {
                *target = source;
            }
        }

        take(&mut self.gender, source.gender);
        take(&mut self.number, source.number);
        take(&mut self.person, source.person);
        take(&mut self.degree, source.degree);
        take(&mut self.mood, source.mood);
        take(&mut self.tense, source.tense);
        take(&mut self.clitic, source.clitic);
        take(&mut self.cli, source.cli);
    }
}
