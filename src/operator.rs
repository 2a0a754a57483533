use std::str::FromStr;

use num::traits::{CheckedAdd, CheckedMul, CheckedSub};

use crate::error::{FractionError, Operand};
use crate::fraction::{checked_div, Fraction};
use crate::parser::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
}

impl Operator {
  /// Applies the operator, reporting overflow instead of panicking.
  pub fn apply(self, lhs: Fraction, rhs: Fraction) -> Result<Fraction, FractionError> {
    let result = match self {
      Operator::Add => lhs.checked_add(&rhs),
      Operator::Subtract => lhs.checked_sub(&rhs),
      Operator::Multiply => lhs.checked_mul(&rhs),
      Operator::Divide => return checked_div(lhs, rhs),
    };
    result.ok_or(FractionError::Overflow(self))
  }
}

impl FromStr for Operator {
  type Err = FractionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim() {
      "+" => Ok(Operator::Add),
      "-" => Ok(Operator::Subtract),
      "*" => Ok(Operator::Multiply),
      "/" => Ok(Operator::Divide),
      other => Err(FractionError::UnknownOperator(other.to_string())),
    }
  }
}

impl std::fmt::Display for Operator {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Operator::Add => write!(f, "+"),
      Operator::Subtract => write!(f, "-"),
      Operator::Multiply => write!(f, "*"),
      Operator::Divide => write!(f, "/"),
    }
  }
}

/// Parses `lhs`, `rhs` and `operator`, in that order, and applies the operator.
pub fn evaluate(lhs: &str, operator: &str, rhs: &str) -> Result<Fraction, FractionError> {
  let lhs = parse(lhs).map_err(|source| FractionError::Operand {
    operand: Operand::First,
    source,
  })?;
  let rhs = parse(rhs).map_err(|source| FractionError::Operand {
    operand: Operand::Second,
    source,
  })?;
  let operator: Operator = operator.parse()?;
  operator.apply(lhs, rhs)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ParseError;

  #[test]
  fn parses_operator_tokens() {
    assert_eq!(" + ".parse::<Operator>(), Ok(Operator::Add));
    assert_eq!("-".parse::<Operator>(), Ok(Operator::Subtract));
    assert_eq!("*".parse::<Operator>(), Ok(Operator::Multiply));
    assert_eq!("/".parse::<Operator>(), Ok(Operator::Divide));
    assert_eq!(
      "%".parse::<Operator>(),
      Err(FractionError::UnknownOperator("%".into()))
    );
    assert_eq!(
      "++".parse::<Operator>(),
      Err(FractionError::UnknownOperator("++".into()))
    );
  }

  #[test]
  fn display_round_trips_through_from_str() {
    for operator in [
      Operator::Add,
      Operator::Subtract,
      Operator::Multiply,
      Operator::Divide,
    ] {
      assert_eq!(operator.to_string().parse::<Operator>(), Ok(operator));
    }
  }

  #[test]
  fn evaluates_expressions() {
    assert_eq!(evaluate("1/2", "+", "1/3").map(|f| f.to_string()), Ok("5/6".into()));
    assert_eq!(evaluate("1/2", "-", "1/2").map(|f| f.to_string()), Ok("0".into()));
    assert_eq!(evaluate("-2/7", "*", "7/2").map(|f| f.to_string()), Ok("-1".into()));
    assert_eq!(evaluate("3", "/", "4").map(|f| f.to_string()), Ok("3/4".into()));
  }

  #[test]
  fn reports_division_by_zero() {
    assert_eq!(evaluate("1/2", "/", "0"), Err(FractionError::DivisionByZero));
    assert_eq!(evaluate("1/2", "/", "0/5"), Err(FractionError::DivisionByZero));
  }

  #[test]
  fn reports_which_operand_failed_first() {
    assert_eq!(
      evaluate("x", "?", "3/0"),
      Err(FractionError::Operand {
        operand: Operand::First,
        source: ParseError::InvalidInteger("x".into()),
      })
    );
    assert_eq!(
      evaluate("1", "?", "3/0"),
      Err(FractionError::Operand {
        operand: Operand::Second,
        source: ParseError::ZeroDenominator,
      })
    );
    assert_eq!(
      evaluate("1", "?", "3"),
      Err(FractionError::UnknownOperator("?".into()))
    );
  }

  #[test]
  fn reports_overflow_instead_of_panicking() {
    assert_eq!(
      evaluate("9223372036854775807", "+", "1"),
      Err(FractionError::Overflow(Operator::Add))
    );
    assert_eq!(
      evaluate("9223372036854775807", "*", "2"),
      Err(FractionError::Overflow(Operator::Multiply))
    );
  }

  #[test]
  fn error_messages_are_readable() {
    let err = evaluate("1", "+", "abc").unwrap_err();
    assert_eq!(err.to_string(), "invalid second number: 'abc' is not a valid integer");
    assert_eq!(
      FractionError::Overflow(Operator::Subtract).to_string(),
      "result of '-' does not fit in a 64-bit fraction"
    );
  }
}
