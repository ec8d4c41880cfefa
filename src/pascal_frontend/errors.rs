use super::span::{CodePosition, Span};
use super::token::TokenKind;

use thiserror::Error;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum LexError {
    #[error("{0}: unrecognized character `{1}`")]
    UnrecognizedChar(CodePosition, char),
    #[error("{0}: comment is never closed with `}}`")]
    UnterminatedComment(CodePosition),
}

#[derive(Debug, PartialEq, Clone, Error)]
pub enum ParserError {
    #[error(transparent)]
    Lexer(#[from] LexError),
    #[error("{span}: expected {expected}, but instead got {found}")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },
    #[error("{span}: expected INTEGER or REAL, but instead got {found}")]
    ExpectedTypeSpec { found: TokenKind, span: Span },
    #[error("{span}: expected expression, but instead got {found}")]
    ExpectedExpr { found: TokenKind, span: Span },
    #[error("{span}: expected `;` or END before identifier `{name}`")]
    UnexpectedIdentifier { name: String, span: Span },
    #[error("{span}: nesting is too deep")]
    TooDeeplyNested { span: Span },
}

pub type LexerResult<T> = Result<T, LexError>;
pub type ParserResult<T> = Result<T, ParserError>;
