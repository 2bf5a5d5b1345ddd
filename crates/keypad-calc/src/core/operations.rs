//! Arithmetic behind the pending operator
//!
//! Type-safe operator enum; raw IEEE results are checked before they reach
//! the display.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom of the right column)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol used in the display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the label printed on the keypad button
    ///
    /// Differs from [`Operator::symbol`] only for subtraction, whose button
    /// carries the typographic minus sign (U+2212).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Subtract => "−",
            other => other.symbol(),
        }
    }

    /// Parses an operator from its display symbol or keypad label
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "×" => Some(Self::Multiply),
            "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator, returning the raw IEEE result
    ///
    /// Division by zero yields NaN rather than an infinity. An infinite
    /// result from the other operators is later reported as overflow and
    /// displayed as `"Error"`, not as `Infinity`.
    #[must_use]
    pub fn evaluate(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Resolves operand text into a checked result
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Parses an operand as accumulated on the keypad
    pub fn parse_operand(text: &str) -> CalcResult<f64> {
        text.parse::<f64>()
            .map_err(|_| CalcError::InvalidOperand(text.to_string()))
    }

    /// Performs an operation on two numbers
    pub fn calculate(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
        Self::check_result(op.evaluate(a, b))
    }

    /// Parses both operands and performs the operation
    pub fn calculate_str(first: &str, second: &str, op: Operator) -> CalcResult<f64> {
        let a = Self::parse_operand(first)?;
        let b = Self::parse_operand(second)?;
        Self::calculate(a, b, op)
    }

    /// NaN only comes out of a zero divisor; infinities are overflow
    fn check_result(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::DivisionByZero)
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}

/// Formats a result for the display, without a trailing `.0`
#[must_use]
pub fn format_result(value: f64) -> String {
    let text = value.to_string();
    match text.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => text,
    }
}
