use super::object::Value;
use crate::pascal_frontend::grammar::{InfixOperator, PrefixOperator};
use crate::pascal_frontend::span::Span;

use thiserror::Error;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum InterpreterError {
    #[error("{1}: malformed numeral `{0}`")]
    MalformedNumber(String, Span),
    #[error("{1}: undefined variable `{0}`")]
    UndefinedVariable(String, Span),
    #[error(
        "{}: type mismatch: cannot apply `{}` to {} {} and {} {}",
        .3,
        .0.symbol(),
        .1.type_name(),
        .1,
        .2.type_name(),
        .2
    )]
    IllegalInfixOperation(InfixOperator, Value, Value, Span),
    #[error(
        "{}: type mismatch: cannot apply unary `{}` to {} {}",
        .2,
        .0.symbol(),
        .1.type_name(),
        .1
    )]
    IllegalPrefixOperation(PrefixOperator, Value, Span),
    #[error("{0}: integer division by zero")]
    DivideByZero(Span),
}

pub type RuntimeResult<T> = Result<T, InterpreterError>;
