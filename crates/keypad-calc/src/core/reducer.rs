//! Input reducer
//!
//! `apply` is total: every event on every state yields a state. Invalid
//! presses are absorbed as no-ops and arithmetic failures become the
//! `"Error"` display.

use serde::{Deserialize, Serialize};

use crate::core::{format_result, CalcError, Calculator, CalculatorState, Operator, ERROR_DISPLAY};

/// Discrete input events accepted by the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorEvent {
    /// Append a digit (0-9) to the active operand
    Digit(u8),
    /// Choose the pending operator
    Operator(Operator),
    /// Append a decimal point to the active operand
    Decimal,
    /// Resolve the pending calculation
    Equals,
    /// Delete the last character of the active operand
    Clear,
    /// Reset everything
    AllClear,
}

impl CalculatorEvent {
    /// Returns the keypad label that produces this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(op) => op.label().to_string(),
            Self::Decimal => ".".to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }

    /// Returns true if this event may resolve a pending calculation
    #[must_use]
    pub const fn resolves(&self) -> bool {
        matches!(self, Self::Equals | Self::Operator(_))
    }
}

/// Applies one event to a state, returning the next state
#[must_use]
pub fn apply(state: &CalculatorState, event: CalculatorEvent) -> CalculatorState {
    let mut next = state.clone();
    match event {
        CalculatorEvent::Digit(d) => enter_digit(&mut next, d),
        CalculatorEvent::Operator(op) => enter_operator(&mut next, op),
        CalculatorEvent::Decimal => enter_decimal(&mut next),
        CalculatorEvent::Equals => {
            resolve(&mut next);
        }
        CalculatorEvent::Clear => clear_last(&mut next),
        CalculatorEvent::AllClear => next = CalculatorState::new(),
    }
    next
}

impl CalculatorState {
    /// Applies one event, returning the next state
    #[must_use]
    pub fn apply(&self, event: CalculatorEvent) -> Self {
        apply(self, event)
    }

    /// Applies a sequence of events in order
    #[must_use]
    pub fn apply_all<I>(&self, events: I) -> Self
    where
        I: IntoIterator<Item = CalculatorEvent>,
    {
        events
            .into_iter()
            .fold(self.clone(), |state, event| apply(&state, event))
    }
}

fn enter_digit(state: &mut CalculatorState, digit: u8) {
    let Some(ch) = char::from_digit(u32::from(digit), 10) else {
        return;
    };
    // A fresh entry after a result starts over
    if state.just_calculated {
        *state = CalculatorState::new();
    }
    state.active_operand_mut().push(ch);
    state.refresh_display();
}

fn enter_operator(state: &mut CalculatorState, op: Operator) {
    match state.pending_operator {
        // Consecutive operators: keep the first one
        Some(_) if state.second_operand.is_empty() => {}
        // Resolve first; the new operator is taken even if that fails
        Some(_) => {
            resolve(state);
            state.pending_operator = Some(op);
            state.display = format!("{}{}", state.first_operand, op.symbol());
        }
        None if state.first_operand.is_empty() => {}
        None => {
            state.pending_operator = Some(op);
            state.refresh_display();
        }
    }
}

fn enter_decimal(state: &mut CalculatorState) {
    let operand = state.active_operand_mut();
    if !operand.contains('.') {
        operand.push('.');
        state.refresh_display();
    }
}

fn clear_last(state: &mut CalculatorState) {
    if state.just_calculated {
        return;
    }
    state.active_operand_mut().pop();
    state.refresh_display();
}

/// Resolves `first op second` into the first operand.
///
/// Returns false when there was nothing to resolve or an operand failed to
/// parse; in the latter case only the display changes.
fn resolve(state: &mut CalculatorState) -> bool {
    let Some(op) = state.pending_operator else {
        return false;
    };
    if !state.is_complete() {
        return false;
    }

    let result = match Calculator::calculate_str(&state.first_operand, &state.second_operand, op) {
        Ok(value) => format_result(value),
        Err(CalcError::InvalidOperand(_)) => {
            state.display = ERROR_DISPLAY.to_string();
            return false;
        }
        Err(CalcError::DivisionByZero | CalcError::Overflow) => ERROR_DISPLAY.to_string(),
    };

    state.display.clone_from(&result);
    state.first_operand = result;
    state.second_operand.clear();
    state.pending_operator = None;
    state.just_calculated = true;
    true
}
