//! Calculator sessions and the driver abstraction
//!
//! A [`Session`] owns one [`CalculatorState`] for its lifetime and replaces
//! it with the reducer's output on every event. Front ends talk to it
//! through [`CalculatorDriver`], so the `verify_*` routines below run
//! unchanged against any of them.

use serde::Serialize;
use tracing::debug;

use crate::config::SessionConfig;
use crate::core::history::{History, HistoryEntry};
use crate::core::{CalculatorEvent, CalculatorState, ERROR_DISPLAY};
use crate::keypad::{Keypad, KeypadError};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calc::prelude::*;
///
/// let mut session = Session::new();
/// session.press_all(&["4", "×", "2", ".", "5", "="]).unwrap();
/// assert_eq!(session.display(), "10");
/// ```
pub trait CalculatorDriver {
    /// Presses a keypad button by label and returns the new display
    fn press(&mut self, label: &str) -> Result<String, KeypadError>;

    /// Sends an event directly and returns the new display
    fn send(&mut self, event: CalculatorEvent) -> String;

    /// Gets the current display
    fn display(&self) -> String;

    /// Returns the calculator to its initial state
    fn reset(&mut self);

    /// Gets history entries (newest first)
    fn history(&self) -> Vec<HistoryEntry>;

    /// Presses several buttons in order, stopping at the first unknown label
    fn press_all(&mut self, labels: &[&str]) -> Result<String, KeypadError> {
        for label in labels {
            self.press(label)?;
        }
        Ok(self.display())
    }
}

/// One calculator session: state, keypad and history
#[derive(Debug, Clone)]
pub struct Session {
    state: CalculatorState,
    keypad: Keypad,
    history: History,
    config: SessionConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session with custom settings
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            keypad: Keypad::new(),
            history: History::with_capacity(config.history_capacity()),
            config,
        }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the completed calculations of this session
    #[must_use]
    pub fn calculations(&self) -> &History {
        &self.history
    }

    /// Takes a serializable picture of the session
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            display: self.state.display().to_string(),
            state: self.state.clone(),
            history: self.history.iter().cloned().collect(),
        }
    }

    fn record_if_resolved(&mut self, before: &CalculatorState, event: CalculatorEvent) {
        // Resolution empties the second operand; a parse failure leaves it
        if !event.resolves() || !before.is_complete() || !self.state.second_operand().is_empty() {
            return;
        }
        let expression = before.expression();
        let result = self.state.first_operand();
        if result == ERROR_DISPLAY {
            debug!(%expression, "calculation failed");
        }
        self.history.record(&expression, result);
    }
}

impl CalculatorDriver for Session {
    fn press(&mut self, label: &str) -> Result<String, KeypadError> {
        let event = self.keypad.press(label).map_err(|err| {
            debug!(%err, "rejected keypad label");
            err
        })?;
        Ok(self.send(event))
    }

    fn send(&mut self, event: CalculatorEvent) -> String {
        let next = self.state.apply(event);
        let before = std::mem::replace(&mut self.state, next);
        self.record_if_resolved(&before, event);
        debug!(?event, display = %self.state.display(), "applied event");
        self.state.display().to_string()
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn reset(&mut self) {
        self.send(CalculatorEvent::AllClear);
    }

    fn history(&self) -> Vec<HistoryEntry> {
        self.history.iter_rev().cloned().collect()
    }
}

/// Serializable view of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// The current display
    pub display: String,
    /// The full accumulator state
    pub state: CalculatorState,
    /// Completed calculations (oldest first)
    pub history: Vec<HistoryEntry>,
}

// ===== Verification routines =====
// Shared by every CalculatorDriver implementation; they panic on mismatch

#[allow(clippy::panic)]
fn press_ok<D: CalculatorDriver>(driver: &mut D, labels: &[&str]) -> String {
    driver
        .press_all(labels)
        .unwrap_or_else(|err| panic!("keypad rejected {labels:?}: {err}"))
}

/// Digits alone display as typed
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_ok(driver, &["1", "2", "0", "7"]), "1207");
    driver.reset();
    assert_eq!(press_ok(driver, &["0", "0", "1"]), "001");
    driver.reset();
}

/// The four operators resolve on `=`
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_ok(driver, &["1", "+", "2", "="]), "3");
    driver.reset();
    assert_eq!(press_ok(driver, &["9", "−", "4", "="]), "5");
    driver.reset();
    assert_eq!(press_ok(driver, &["4", "×", "2", ".", "5", "="]), "10");
    driver.reset();
    assert_eq!(press_ok(driver, &["7", "÷", "2", "="]), "3.5");
    driver.reset();
}

/// Division by zero shows the error text
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_ok(driver, &["5", "÷", "0", "="]), ERROR_DISPLAY);
    // A digit starts over after the error
    assert_eq!(press_ok(driver, &["8"]), "8");
    driver.reset();
    assert!(driver.press("%").is_err());
    assert_eq!(driver.display(), "0");
}

/// Only the first of consecutive operators counts
pub fn verify_consecutive_operators<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_ok(driver, &["6", "×"]), "6×");
    assert_eq!(press_ok(driver, &["+", "÷"]), "6×");
    assert_eq!(press_ok(driver, &["7", "="]), "42");
    driver.reset();
}

/// Equals leaves a result that the next digit replaces and `C` keeps
pub fn verify_after_equals<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_ok(driver, &["2", "+", "2", "="]), "4");
    assert_eq!(press_ok(driver, &["C"]), "4");
    assert_eq!(press_ok(driver, &["9"]), "9");
    driver.reset();
}

/// `C` deletes one character; `AC` resets
pub fn verify_clearing<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_ok(driver, &["1", "2", "C"]), "1");
    assert_eq!(press_ok(driver, &["C"]), "0");
    assert_eq!(press_ok(driver, &["3", "+", "4", "AC"]), "0");
    driver.reset();
}

/// Completed calculations are listed newest first
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    let before = driver.history().len();
    press_ok(driver, &["1", "+", "1", "="]);
    press_ok(driver, &["3", "×", "3", "="]);

    let history = driver.history();
    assert_eq!(history.len(), before + 2);
    assert_eq!(history[0].expression, "3×3");
    assert_eq!(history[0].result, "9");
    driver.reset();
}

/// Runs every verification routine in turn
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_basic_arithmetic(driver);
    verify_error_handling(driver);
    verify_consecutive_operators(driver);
    verify_after_equals(driver);
    verify_clearing(driver);
    verify_history(driver);
}
