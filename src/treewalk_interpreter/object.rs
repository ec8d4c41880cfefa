use super::errors::{InterpreterError, RuntimeResult};
use crate::pascal_frontend::grammar::{InfixOperator, PrefixOperator};
use crate::pascal_frontend::span::Span;

use std::fmt;

/// A runtime value. Nothing else exists at runtime.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

impl Value {
    /// Interprets the raw text of a numeral.
    ///
    /// Text containing a `.` is always a base-10 float. Otherwise a `0x`, `0b`
    /// or `0o` prefix selects base 16, 2 or 8, a bare leading `0` followed by
    /// more digits selects legacy octal, and anything else is decimal.
    pub fn from_numeral(raw: &str) -> Option<Value> {
        if raw.contains('.') {
            return raw.parse().ok().map(Value::Float);
        }

        let (radix, digits) = split_radix(raw);
        i64::from_str_radix(digits, radix).ok().map(Value::Integer)
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
        }
    }

    /// The left operand picks the arithmetic. An integer on the left means
    /// integer arithmetic unless the operator is `/`, and then the right side
    /// must be an integer too. Everything else is float arithmetic, where an
    /// integer left operand is converted but a float left operand demands a
    /// float right operand. Errors are reported at `span`.
    pub fn apply_infix_op(
        op: InfixOperator,
        lhs: Value,
        rhs: Value,
        span: Span,
    ) -> RuntimeResult<Value> {
        let mismatch = InterpreterError::IllegalInfixOperation(op, lhs, rhs, span);

        match lhs {
            Value::Integer(a) if op != InfixOperator::FloatDivide => match rhs {
                Value::Integer(b) => integer_binop(op, a, b)
                    .map(Value::Integer)
                    .ok_or(InterpreterError::DivideByZero(span)),
                _ => Err(mismatch),
            },
            _ => {
                let (a, b) = match (lhs, rhs) {
                    (Value::Integer(a), Value::Integer(b)) => (a as f64, b as f64),
                    (Value::Integer(a), Value::Float(b)) => (a as f64, b),
                    (Value::Float(a), Value::Float(b)) => (a, b),
                    (Value::Float(_), Value::Integer(_)) => return Err(mismatch),
                };

                float_binop(op, a, b).map(Value::Float).ok_or(mismatch)
            }
        }
    }

    /// Unary minus is only defined for integers.
    pub fn apply_prefix_op(op: PrefixOperator, value: Value, span: Span) -> RuntimeResult<Value> {
        match op {
            PrefixOperator::Identity => Ok(value),
            PrefixOperator::Negate => match value {
                Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
                Value::Float(_) => Err(InterpreterError::IllegalPrefixOperation(op, value, span)),
            },
        }
    }
}

fn split_radix(raw: &str) -> (u32, &str) {
    let mut chars = raw.chars();

    match (chars.next(), chars.next()) {
        (Some('0'), Some('x' | 'X')) => (16, &raw[2..]),
        (Some('0'), Some('b' | 'B')) => (2, &raw[2..]),
        (Some('0'), Some('o' | 'O')) => (8, &raw[2..]),
        (Some('0'), Some(_)) => (8, &raw[1..]),
        _ => (10, raw),
    }
}

/// `None` means division by zero.
fn integer_binop(op: InfixOperator, a: i64, b: i64) -> Option<i64> {
    let value = match op {
        InfixOperator::Add => a.wrapping_add(b),
        InfixOperator::Subtract => a.wrapping_sub(b),
        InfixOperator::Multiply => a.wrapping_mul(b),
        InfixOperator::IntegerDivide | InfixOperator::Modulo if b == 0 => return None,
        InfixOperator::IntegerDivide => a.wrapping_div(b),
        InfixOperator::Modulo => a.wrapping_rem(b),
        InfixOperator::FloatDivide => unreachable!("`/` always takes the float path"),
    };

    Some(value)
}

fn float_binop(op: InfixOperator, a: f64, b: f64) -> Option<f64> {
    let value = match op {
        InfixOperator::Add => a + b,
        InfixOperator::Subtract => a - b,
        InfixOperator::Multiply => a * b,
        InfixOperator::FloatDivide => a / b,
        InfixOperator::IntegerDivide | InfixOperator::Modulo => return None,
    };

    Some(value)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            // Debug keeps the fractional part, so 3.0 does not print as 3.
            Value::Float(x) => write!(f, "{:?}", x),
        }
    }
}
