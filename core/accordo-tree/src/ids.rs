/// Position of a token in its sentence (0-based). Heads and children are
/// stored as ids into the sentence arena, never as owning references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TokenId(pub usize);

impl TokenId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    /// The 1-based token number used by CoNLL-X.
    pub const fn number(self) -> usize {
        self.0 + 1
    }
}

impl From<usize> for TokenId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<TokenId> for usize {
    fn from(id: TokenId) -> usize {
        id.0
    }
}
