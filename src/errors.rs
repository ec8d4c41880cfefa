use crate::pascal_frontend::{LexError, ParserError};
use crate::treewalk_interpreter::InterpreterError;

use thiserror::Error;

/// Failure of a whole run, classified by the stage that detected it.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum PascalError {
    #[error("lex error: {0}")]
    Lex(LexError),
    #[error("parse error: {0}")]
    Parse(ParserError),
    #[error("runtime error: {0}")]
    Eval(#[from] InterpreterError),
}

impl From<LexError> for PascalError {
    fn from(error: LexError) -> Self {
        PascalError::Lex(error)
    }
}

impl From<ParserError> for PascalError {
    /// The parser pulls tokens, so lexer failures reach us wrapped.
    fn from(error: ParserError) -> Self {
        match error {
            ParserError::Lexer(e) => PascalError::Lex(e),
            e => PascalError::Parse(e),
        }
    }
}

pub type PascalResult<T> = Result<T, PascalError>;
