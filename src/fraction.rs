//! Rational numbers kept in canonical form.
//!
//! Every [`Fraction`] is reduced, with the sign carried by the numerator and a
//! strictly positive denominator. Products are formed in 128 bits and only
//! narrowed back to `i64` after reduction, so results such as
//! `(i64::MAX / 2) * (2 / i64::MAX)` do not overflow on the way.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num::rational::Ratio;
use num::traits::{CheckedAdd, CheckedMul, CheckedSub, One, PrimInt, Unsigned, Zero};

use crate::error::FractionError;
use crate::operator::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
  numerator: i64,
  denominator: i64,
}

impl Fraction {
  /// Same as [`normalize`].
  pub fn new(numerator: i64, denominator: i64) -> Self {
    normalize(numerator, denominator)
  }

  pub const fn from_integer(value: i64) -> Self {
    Self {
      numerator: value,
      denominator: 1,
    }
  }

  pub const fn numerator(&self) -> i64 {
    self.numerator
  }

  /// Always positive.
  pub const fn denominator(&self) -> i64 {
    self.denominator
  }

  pub const fn is_zero(&self) -> bool {
    self.numerator == 0
  }

  pub const fn is_integer(&self) -> bool {
    self.denominator == 1
  }

  fn wide(self) -> (i128, i128) {
    (self.numerator as i128, self.denominator as i128)
  }
}

/// Greatest common divisor of `|a|` and `|b|`, with `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> u64 {
  euclid(a.unsigned_abs(), b.unsigned_abs())
}

fn euclid<T: PrimInt + Unsigned>(mut a: T, mut b: T) -> T {
  while !b.is_zero() {
    let t = a % b;
    a = b;
    b = t;
  }
  a
}

/// Reduces `numerator / denominator` to canonical form.
///
/// A zero denominator is not an error here: it is replaced by 1, so
/// `normalize(5, 0)` is the integer 5. Strict validation of user input lives
/// in [`crate::parser::parse`], which rejects `x/0` before it gets this far.
///
/// # Panics
///
/// When the reduced value does not fit in `i64`, which only happens for
/// `normalize(i64::MIN, -1)` and friends.
pub fn normalize(numerator: i64, denominator: i64) -> Fraction {
  fits(reduce(numerator.into(), denominator.into()), "normalize")
}

// Callers keep |numerator| and |denominator| below 2^127, so negation and
// the narrowing of `g` cannot overflow.
fn reduce(numerator: i128, denominator: i128) -> Option<Fraction> {
  let mut n = numerator;
  let mut d = denominator;
  if d == 0 {
    d = 1;
  }
  if d < 0 {
    n = -n;
    d = -d;
  }
  let g = euclid(n.unsigned_abs(), d.unsigned_abs());
  if g != 0 {
    let g = g as i128;
    n /= g;
    d /= g;
  }
  Some(Fraction {
    numerator: i64::try_from(n).ok()?,
    denominator: i64::try_from(d).ok()?,
  })
}

fn fits(result: Option<Fraction>, action: &str) -> Fraction {
  match result {
    Some(fraction) => fraction,
    None => panic!("attempt to {action} fractions with overflow"),
  }
}

/// # Panics
///
/// If the reduced sum does not fit in `i64`. See [`CheckedAdd`].
pub fn add(a: Fraction, b: Fraction) -> Fraction {
  fits(a.checked_add(&b), "add")
}

/// # Panics
///
/// If the reduced difference does not fit in `i64`. See [`CheckedSub`].
pub fn sub(a: Fraction, b: Fraction) -> Fraction {
  fits(a.checked_sub(&b), "subtract")
}

/// # Panics
///
/// If the reduced product does not fit in `i64`. See [`CheckedMul`].
pub fn mul(a: Fraction, b: Fraction) -> Fraction {
  fits(a.checked_mul(&b), "multiply")
}

/// Divides `a` by `b`, failing with [`FractionError::DivisionByZero`] when `b`
/// is zero.
///
/// # Panics
///
/// If the reduced quotient does not fit in `i64`. Use [`checked_div`] to get
/// [`FractionError::Overflow`] instead.
pub fn div(a: Fraction, b: Fraction) -> Result<Fraction, FractionError> {
  match checked_div(a, b) {
    Err(FractionError::Overflow(_)) => panic!("attempt to divide fractions with overflow"),
    other => other,
  }
}

pub fn checked_div(a: Fraction, b: Fraction) -> Result<Fraction, FractionError> {
  if b.is_zero() {
    return Err(FractionError::DivisionByZero);
  }
  let (an, ad) = a.wide();
  let (bn, bd) = b.wide();
  reduce(an * bd, ad * bn).ok_or(FractionError::Overflow(Operator::Divide))
}

impl CheckedAdd for Fraction {
  fn checked_add(&self, v: &Self) -> Option<Self> {
    let (an, ad) = self.wide();
    let (bn, bd) = v.wide();
    reduce(an * bd + bn * ad, ad * bd)
  }
}

impl CheckedSub for Fraction {
  fn checked_sub(&self, v: &Self) -> Option<Self> {
    let (an, ad) = self.wide();
    let (bn, bd) = v.wide();
    reduce(an * bd - bn * ad, ad * bd)
  }
}

impl CheckedMul for Fraction {
  fn checked_mul(&self, v: &Self) -> Option<Self> {
    let (an, ad) = self.wide();
    let (bn, bd) = v.wide();
    reduce(an * bn, ad * bd)
  }
}

impl Add for Fraction {
  type Output = Fraction;

  fn add(self, rhs: Self) -> Self::Output {
    add(self, rhs)
  }
}

impl Sub for Fraction {
  type Output = Fraction;

  fn sub(self, rhs: Self) -> Self::Output {
    sub(self, rhs)
  }
}

impl Mul for Fraction {
  type Output = Fraction;

  fn mul(self, rhs: Self) -> Self::Output {
    mul(self, rhs)
  }
}

impl Neg for Fraction {
  type Output = Fraction;

  fn neg(self) -> Self::Output {
    let (n, d) = self.wide();
    fits(reduce(-n, d), "negate")
  }
}

impl Zero for Fraction {
  fn zero() -> Self {
    Fraction::from_integer(0)
  }

  fn is_zero(&self) -> bool {
    self.numerator == 0
  }
}

impl One for Fraction {
  fn one() -> Self {
    Fraction::from_integer(1)
  }
}

// A derived Default would have a zero denominator.
impl Default for Fraction {
  fn default() -> Self {
    Fraction::from_integer(0)
  }
}

impl From<i64> for Fraction {
  fn from(value: i64) -> Self {
    Fraction::from_integer(value)
  }
}

impl From<Fraction> for Ratio<i64> {
  fn from(fraction: Fraction) -> Self {
    Ratio::new_raw(fraction.numerator, fraction.denominator)
  }
}

impl From<Ratio<i64>> for Fraction {
  fn from(ratio: Ratio<i64>) -> Self {
    normalize(*ratio.numer(), *ratio.denom())
  }
}

impl fmt::Display for Fraction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.denominator == 1 {
      write!(f, "{}", self.numerator)
    } else {
      write!(f, "{}/{}", self.numerator, self.denominator)
    }
  }
}
