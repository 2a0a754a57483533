//! Fraction calculator: exact arithmetic on `i64` fractions that are always
//! kept reduced, plus the small menu-driven session used by the binary.
//!
//! ```
//! use fraction_calc::{evaluate, parse};
//!
//! let sum = parse("1/2").unwrap() + parse("1/3").unwrap();
//! assert_eq!(sum.to_string(), "5/6");
//! assert_eq!(evaluate("-2/7", "*", "7/2").unwrap().to_string(), "-1");
//! ```

pub mod error;
pub mod fraction;
pub mod operator;
pub mod parser;
pub mod repl;

pub use error::{FractionError, Operand, ParseError};
pub use fraction::{add, checked_div, div, gcd, mul, normalize, sub, Fraction};
pub use operator::{evaluate, Operator};
pub use parser::parse;
