//! Core calculator module
//!
//! Holds the accumulator state, the event reducer and the arithmetic it
//! resolves. Nothing in here fails outward: arithmetic problems end up as
//! the `"Error"` display text.

pub mod history;
mod operations;
pub mod reducer;
pub mod state;

pub use operations::{format_result, Calculator, Operator};
pub use reducer::{apply, CalculatorEvent};
pub use state::CalculatorState;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Display text shown whenever a calculation cannot produce a number
pub const ERROR_DISPLAY: &str = "Error";

/// Display text of a cleared calculator
pub const ZERO_DISPLAY: &str = "0";

/// Arithmetic failures met while resolving a pending calculation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// An operand could not be read as a number
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),
    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
}
