//! CoNLL-X interchange: the ten-column row format used to talk to the
//! dependency parser and to store annotated corpora.

pub mod codec;
pub mod parser;
pub mod row;
pub mod validate;

pub use codec::{
    encode_sentence, encode_tagged, load_file, read_corpus, read_tagged, write_corpus, write_file,
};
pub use parser::{attach_dependencies, DependencyParser, ParserError};
pub use validate::{validate, validate_file, ValidationReport};

use accordo_tree::StructureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConllError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected 10 columns, found {found}")]
    ColumnCount { line: usize, found: usize },
    #[error("line {line}: unexpected token number {value:?}")]
    TokenNumber { line: usize, value: String },
    #[error("line {line}: invalid head {value:?}")]
    Head { line: usize, value: String },
    #[error("line {line}: {reason}")]
    Readings { line: usize, reason: String },
    #[error("sentence starting at line {line}: {source}")]
    Structure {
        line: usize,
        #[source]
        source: StructureError,
    },
    #[error(transparent)]
    Tree(#[from] StructureError),
    #[error(transparent)]
    Parser(#[from] ParserError),
}
