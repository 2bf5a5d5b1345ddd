//! Calculator accumulator state
//!
//! A plain value: the reducer takes one and hands back the next. The
//! display is derived from the operands except for the literal error and
//! reset texts.

use serde::{Deserialize, Serialize};

use crate::core::{Operator, ZERO_DISPLAY};

/// Accumulated operands, the pending operator and the current display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) first_operand: String,
    pub(crate) second_operand: String,
    pub(crate) pending_operator: Option<Operator>,
    pub(crate) just_calculated: bool,
    pub(crate) display: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the initial state: nothing entered, display `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            first_operand: String::new(),
            second_operand: String::new(),
            pending_operator: None,
            just_calculated: false,
            display: ZERO_DISPLAY.to_string(),
        }
    }

    /// Returns the text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the operand entered before the operator (or the last result)
    #[must_use]
    pub fn first_operand(&self) -> &str {
        &self.first_operand
    }

    /// Returns the operand entered after the operator
    #[must_use]
    pub fn second_operand(&self) -> &str {
        &self.second_operand
    }

    /// Returns the pending operator, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Returns true if the display holds a freshly produced result
    #[must_use]
    pub fn just_calculated(&self) -> bool {
        self.just_calculated
    }

    /// Returns the operand that digits and decimal points currently extend
    #[must_use]
    pub fn active_operand(&self) -> &str {
        if self.pending_operator.is_some() {
            &self.second_operand
        } else {
            &self.first_operand
        }
    }

    pub(crate) fn active_operand_mut(&mut self) -> &mut String {
        if self.pending_operator.is_some() {
            &mut self.second_operand
        } else {
            &mut self.first_operand
        }
    }

    /// Returns the expression as typed: `first`, `first op` or `first op second`
    #[must_use]
    pub fn expression(&self) -> String {
        match self.pending_operator {
            None => self.first_operand.clone(),
            Some(op) => format!("{}{}{}", self.first_operand, op.symbol(), self.second_operand),
        }
    }

    /// Recomputes the display from the operands
    pub(crate) fn refresh_display(&mut self) {
        self.display = if self.first_operand.is_empty() && self.pending_operator.is_none() {
            ZERO_DISPLAY.to_string()
        } else {
            self.expression()
        };
    }

    /// Returns true if the operands and operator can be resolved
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.first_operand.is_empty()
            && !self.second_operand.is_empty()
            && self.pending_operator.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert!(state.first_operand().is_empty());
        assert!(state.second_operand().is_empty());
        assert_eq!(state.pending_operator(), None);
        assert!(!state.just_calculated());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(CalculatorState::default(), CalculatorState::new());
    }

    #[test]
    fn test_expression_forms() {
        let mut state = CalculatorState::new();
        state.first_operand = "12".into();
        assert_eq!(state.expression(), "12");

        state.pending_operator = Some(Operator::Divide);
        assert_eq!(state.expression(), "12÷");

        state.second_operand = "4".into();
        assert_eq!(state.expression(), "12÷4");
    }

    #[test]
    fn test_active_operand_follows_operator() {
        let mut state = CalculatorState::new();
        state.first_operand = "7".into();
        assert_eq!(state.active_operand(), "7");

        state.pending_operator = Some(Operator::Add);
        assert_eq!(state.active_operand(), "");

        state.active_operand_mut().push('3');
        assert_eq!(state.second_operand(), "3");
    }

    #[test]
    fn test_refresh_display_empty_is_zero() {
        let mut state = CalculatorState::new();
        state.display = "stale".into();
        state.refresh_display();
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_is_complete() {
        let mut state = CalculatorState::new();
        assert!(!state.is_complete());
        state.first_operand = "1".into();
        state.pending_operator = Some(Operator::Add);
        assert!(!state.is_complete());
        state.second_operand = "2".into();
        assert!(state.is_complete());
    }

    #[test]
    fn test_state_serializes_to_json() {
        let mut state = CalculatorState::new();
        state.first_operand = "4".into();
        state.pending_operator = Some(Operator::Multiply);
        state.refresh_display();

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"pending_operator\":\"Multiply\""));
        assert!(json.contains("\"display\":\"4×\""));

        let back: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
