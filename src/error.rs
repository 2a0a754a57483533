use std::fmt;

use thiserror::Error;

use crate::operator::Operator;

/// Why a piece of text is not a fraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("expected a number such as 5 or 3/4, found nothing")]
  Empty,
  #[error("'{0}' is not a valid integer")]
  InvalidInteger(String),
  #[error("the denominator must not be zero")]
  ZeroDenominator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
  First,
  Second,
}

impl fmt::Display for Operand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Operand::First => write!(f, "first"),
      Operand::Second => write!(f, "second"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
  #[error("invalid {operand} number: {source}")]
  Operand {
    operand: Operand,
    #[source]
    source: ParseError,
  },
  #[error("division by zero")]
  DivisionByZero,
  #[error("unknown operator '{0}', expected one of + - * /")]
  UnknownOperator(String),
  #[error("result of '{0}' does not fit in a 64-bit fraction")]
  Overflow(Operator),
}
