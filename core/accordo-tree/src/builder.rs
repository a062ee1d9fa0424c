use accordo_tag::{DependencyRelation, Reading};
use log::{debug, warn};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use thiserror::Error;

use crate::ids::TokenId;
use crate::sentence::Sentence;
use crate::token::{Span, Token};

/// Token numbers in errors are 1-based, as in parser output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("sentence has no tokens")]
    Empty,
    #[error("{tokens} tokens but {attachments} attachments")]
    LengthMismatch { tokens: usize, attachments: usize },
    #[error("token {token} has no readings")]
    NoReadings { token: usize },
    #[error("token {token} points at head {head}, which does not exist")]
    HeadOutOfRange { token: usize, head: usize },
    #[error("token {token} is attached to itself")]
    SelfAttachment { token: usize },
    #[error("token {token} is part of a dependency cycle")]
    Cycle { token: usize },
    #[error("sentence has no root")]
    NoRoot,
    #[error("tokens {first} and {second} are both attached to the root")]
    MultipleRoots { first: usize, second: usize },
}

/// A tagged token before it is placed in the tree.
#[derive(Debug, Clone)]
pub struct TokenInput {
    pub form: String,
    pub span: Span,
    pub readings: Vec<Reading>,
}

impl TokenInput {
    pub fn new(form: impl Into<String>, span: Span, readings: Vec<Reading>) -> Self {
        Self {
            form: form.into(),
            span,
            readings,
        }
    }
}

/// Parser output for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// 1-based head number; 0 marks the root.
    pub head: usize,
    /// Raw relation label, sanitized on lookup.
    pub label: Option<String>,
}

impl Attachment {
    pub fn root() -> Self {
        Self {
            head: 0,
            label: None,
        }
    }

    pub fn to(head: usize, label: impl Into<String>) -> Self {
        Self {
            head,
            label: Some(label.into()),
        }
    }
}

/// Assembles the dependency tree. Tokens are created first so heads may point
/// forwards; heads and children are resolved in a second pass.
pub fn build_sentence(
    inputs: Vec<TokenInput>,
    attachments: &[Attachment],
) -> Result<Sentence, StructureError> {
    if inputs.is_empty() {
        return Err(StructureError::Empty);
    }
    if inputs.len() != attachments.len() {
        return Err(StructureError::LengthMismatch {
            tokens: inputs.len(),
            attachments: attachments.len(),
        });
    }

    // 1. Instantiate every token with its readings
    let mut tokens = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.into_iter().enumerate() {
        if input.readings.is_empty() {
            return Err(StructureError::NoReadings { token: index + 1 });
        }
        tokens.push(Token {
            form: input.form,
            span: input.span,
            readings: input.readings,
            relation: None,
            head: None,
            children: Vec::new(),
        });
    }

    // 2. Resolve heads and relations
    let count = tokens.len();
    let mut root: Option<TokenId> = None;
    let mut graph = DiGraph::<(), ()>::with_capacity(count, count);
    for _ in 0..count {
        graph.add_node(());
    }

    for (index, attachment) in attachments.iter().enumerate() {
        let number = index + 1;
        tokens[index].relation = attachment.label.as_deref().and_then(|label| {
            let relation = DependencyRelation::from_label(label);
            if relation.is_none() && !label.is_empty() && label != "_" {
                warn!("token {}: unknown relation label {:?}", number, label);
            }
            relation
        });

        match attachment.head {
            0 => {
                if let Some(first) = root {
                    return Err(StructureError::MultipleRoots {
                        first: first.number(),
                        second: number,
                    });
                }
                root = Some(TokenId(index));
            }
            head if head > count => {
                return Err(StructureError::HeadOutOfRange { token: number, head });
            }
            head if head == number => {
                return Err(StructureError::SelfAttachment { token: number });
            }
            head => {
                let head = TokenId(head - 1);
                tokens[index].head = Some(head);
                // Visited in token order, so children stay sorted.
                tokens[head.0].children.push(TokenId(index));
                graph.add_edge(NodeIndex::new(index), NodeIndex::new(head.0), ());
            }
        }
    }

    // 3. Reject cycles
    if let Err(cycle) = toposort(&graph, None) {
        return Err(StructureError::Cycle {
            token: cycle.node_id().index() + 1,
        });
    }

    let root = root.ok_or(StructureError::NoRoot)?;
    debug!("built sentence of {} tokens rooted at {}", count, root.number());

    Ok(Sentence { tokens, root })
}
