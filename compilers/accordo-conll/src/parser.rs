use accordo_tree::{build_sentence, Attachment, Sentence, TokenInput};
use log::{debug, warn};
use thiserror::Error;

use crate::codec::encode_tagged;
use crate::row::{parse_number, Row, EMPTY};
use crate::ConllError;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("dependency parser failed: {0}")]
    Failed(String),
    #[error("parser row {row} is malformed: {reason}")]
    Malformed { row: usize, reason: String },
    #[error("parser returned no row for token {token}")]
    MissingToken { token: usize },
}

/// An external dependency parser. Receives the tagged sentence as CoNLL-X rows
/// with blank head and relation columns and returns the rows filled in.
pub trait DependencyParser {
    fn parse(&self, rows: &[String]) -> Result<Vec<String>, ParserError>;
}

impl<P: DependencyParser + ?Sized> DependencyParser for &P {
    fn parse(&self, rows: &[String]) -> Result<Vec<String>, ParserError> {
        (**self).parse(rows)
    }
}

/// Runs `parser` over the tagged tokens and builds the tree from its answer.
pub fn attach_dependencies(
    tokens: Vec<TokenInput>,
    parser: &dyn DependencyParser,
) -> Result<Sentence, ConllError> {
    let rows = encode_tagged(&tokens);
    let parsed = parser.parse(&rows)?;

    let mut attachments: Vec<Option<Attachment>> = vec![None; tokens.len()];
    for (index, text) in parsed.iter().enumerate() {
        let row = Row::split(text).map_err(|found| ParserError::Malformed {
            row: index + 1,
            reason: format!("{} columns", found),
        })?;

        let slot = parse_number(row.id)
            .filter(|number| (1..=tokens.len()).contains(number))
            .map(|number| number - 1);
        let Some(slot) = slot else {
            warn!("skipping parser row {} for unknown token {:?}", index + 1, row.id);
            continue;
        };

        let head = parse_number(row.head).ok_or_else(|| ParserError::Malformed {
            row: index + 1,
            reason: format!("head {:?} is not a number", row.head),
        })?;
        let label = (row.deprel != EMPTY).then(|| row.deprel.to_string());
        attachments[slot] = Some(Attachment { head, label });
    }

    let attachments = attachments
        .into_iter()
        .enumerate()
        .map(|(index, attachment)| attachment.ok_or(ParserError::MissingToken { token: index + 1 }))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("parser attached {} tokens", attachments.len());
    Ok(build_sentence(tokens, &attachments)?)
}
