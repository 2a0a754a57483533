use std::str::FromStr;

use crate::error::ParseError;
use crate::fraction::{normalize, Fraction};

const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Reads an integer (`5`, `-2`) or a fraction (`3/4`, `-2/7`, ` 6 / 8 `).
///
/// Unlike [`normalize`], a zero denominator is rejected.
pub fn parse(text: &str) -> Result<Fraction, ParseError> {
  let text = trim(text);
  if text.is_empty() {
    return Err(ParseError::Empty);
  }
  match text.split_once('/') {
    None => Ok(Fraction::from_integer(parse_integer(text)?)),
    Some((left, right)) => {
      let numerator = parse_integer(trim(left))?;
      let denominator = parse_integer(trim(right))?;
      if denominator == 0 {
        return Err(ParseError::ZeroDenominator);
      }
      Ok(normalize(numerator, denominator))
    }
  }
}

fn trim(text: &str) -> &str {
  text.trim_matches(WHITESPACE)
}

fn parse_integer(token: &str) -> Result<i64, ParseError> {
  token
    .parse::<i64>()
    .map_err(|_| ParseError::InvalidInteger(token.to_string()))
}

impl FromStr for Fraction {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse(s)
  }
}
