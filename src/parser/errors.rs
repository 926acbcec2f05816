use thiserror::Error;
use crate::lexer::Position;

/// Structural errors found while building the tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Invalid closing bracket at {0}: no node is open")]
    UnmatchedClosingBracket(Position),

    #[error("Unclosed bracket opened at {0}")]
    UnclosedBracket(Position),

    #[error("Brackets nested deeper than {0} levels at {1}")]
    NestingTooDeep(usize, Position),

    #[error("Word '{0}' at {1} is outside of any node")]
    WordOutsideNode(String, Position),
}
