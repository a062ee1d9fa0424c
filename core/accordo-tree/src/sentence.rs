use std::collections::VecDeque;
use std::ops::Index;

use crate::ids::TokenId;
use crate::token::Token;

/// A tagged sentence together with its dependency tree. Tokens live in an arena
/// indexed by [`TokenId`]; the builder guarantees a single root and no cycles.
#[derive(Debug, Clone)]
pub struct Sentence {
    pub(crate) tokens: Vec<Token>,
    pub(crate) root: TokenId,
}

impl Sentence {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn ids(&self) -> impl Iterator<Item = TokenId> {
        (0..self.tokens.len()).map(TokenId)
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0)
    }

    pub fn root(&self) -> TokenId {
        self.root
    }

    pub fn head(&self, id: TokenId) -> Option<TokenId> {
        self[id].head
    }

    pub fn children(&self, id: TokenId) -> &[TokenId] {
        &self[id].children
    }

    /// Every token reachable from the root, level by level.
    pub fn breadth_first(&self) -> Vec<TokenId> {
        let mut order = Vec::with_capacity(self.tokens.len());
        let mut queue = VecDeque::from([self.root]);
        while let Some(id) = queue.pop_front() {
            order.push(id);
            queue.extend(self.children(id).iter().copied());
        }
        order
    }

    /// Surface forms joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.form.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Index<TokenId> for Sentence {
    type Output = Token;

    fn index(&self, id: TokenId) -> &Token {
        &self.tokens[id.0]
    }
}
