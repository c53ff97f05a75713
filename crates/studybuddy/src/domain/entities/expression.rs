//! Expression Entity
//!
//! A two-operand integer problem such as `7 / 2`, detected in a question
//! and evaluated by the arithmetic tier. Operands are unbounded integers.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use regex::Regex;
use std::sync::OnceLock;

use crate::domain::errors::ArithmeticError;
use crate::domain::value_objects::Operator;

/// Whole-text match of `<integer> <operator> <integer>` with free whitespace.
/// `\d` is any Unicode decimal digit (`٣`, `३`, ...).
static EXPRESSION_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Single Unicode decimal digit
static DECIMAL_DIGIT: OnceLock<Regex> = OnceLock::new();

fn expression_pattern() -> &'static Regex {
    EXPRESSION_PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d+)\s*([+\-*/])\s*(\d+)\s*$").expect("expression pattern is valid")
    })
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT
        .get_or_init(|| Regex::new(r"^\p{Nd}$").expect("digit pattern is valid"))
        .is_match(c.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit.
///
/// `Nd` code points come in contiguous ascending runs of whole `0..=9`
/// sets, so the value is the distance to the start of the run, mod 10.
fn digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut code = c as u32;
    let mut run = 0u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        run += 1;
        code -= 1;
    }
    Some(run % 10)
}

/// Parsed arithmetic problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub left: BigInt,
    pub operator: Operator,
    pub right: BigInt,
}

impl Expression {
    pub fn new(left: impl Into<BigInt>, operator: Operator, right: impl Into<BigInt>) -> Self {
        Self {
            left: left.into(),
            operator,
            right: right.into(),
        }
    }

    /// Detect an expression in normalized question text.
    ///
    /// Returns `None` when the text is not shaped like an expression at all,
    /// and `Some(Err(_))` when it is but the operands cannot be read.
    pub fn detect(text: &str) -> Option<Result<Self, ArithmeticError>> {
        let captures = expression_pattern().captures(text)?;

        Some(Self::from_parts(&captures[1], &captures[2], &captures[3]))
    }

    fn from_parts(left: &str, operator: &str, right: &str) -> Result<Self, ArithmeticError> {
        let left = parse_operand(left)?;
        let operator = operator
            .parse::<Operator>()
            .map_err(ArithmeticError::UnknownOperator)?;
        let right = parse_operand(right)?;

        Ok(Self {
            left,
            operator,
            right,
        })
    }

    /// Evaluate with exact integer arithmetic; division yields the correctly
    /// rounded float quotient
    pub fn evaluate(&self) -> Result<Evaluation, ArithmeticError> {
        let value = match self.operator {
            Operator::Add => &self.left + &self.right,
            Operator::Subtract => &self.left - &self.right,
            Operator::Multiply => &self.left * &self.right,
            Operator::Divide => return self.divide(),
        };

        Ok(Evaluation::Integer(value))
    }

    fn divide(&self) -> Result<Evaluation, ArithmeticError> {
        if self.right.is_zero() {
            return Ok(Evaluation::Undefined);
        }

        BigRational::new(self.left.clone(), self.right.clone())
            .to_f64()
            .filter(|quotient| quotient.is_finite())
            .map(Evaluation::Quotient)
            .ok_or(ArithmeticError::QuotientTooLarge)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

fn parse_operand(digits: &str) -> Result<BigInt, ArithmeticError> {
    let ascii = digits
        .chars()
        .map(|c| digit_value(c).and_then(|d| char::from_digit(d, 10)))
        .collect::<Option<String>>()
        .ok_or_else(|| ArithmeticError::InvalidOperand(digits.to_string()))?;

    ascii
        .parse::<BigInt>()
        .map_err(|_| ArithmeticError::InvalidOperand(digits.to_string()))
}

/// Result of evaluating an [`Expression`]
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Integer(BigInt),
    Quotient(f64),
    /// Division by zero
    Undefined,
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evaluation::Integer(value) => write!(f, "{}", value),
            Evaluation::Quotient(value) => f.write_str(&format_quotient(*value)),
            Evaluation::Undefined => write!(f, "undefined (division by zero)"),
        }
    }
}

/// Render a quotient the way students expect floats to read: always with a
/// fractional part (`2.0`), switching to exponent notation outside
/// `1e-4 <= |v| < 1e16` (`1e+16`, `2.5e-05`).
fn format_quotient(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e20"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let plain = format!("{}", value);
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}
