//! Calculator keypad
//!
//! The input boundary: button labels are mapped to reducer events here, so
//! an unknown label is rejected before it can reach the reducer.
//!
//! Layout, in row-major order:
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
//! [ 4 ] [ 5 ] [ 6 ] [ × ]
//! [ 1 ] [ 2 ] [ 3 ] [ − ]
//! [ 0 ] [ . ] [ = ] [ + ]
//! [ AC ] [ C ]
//! ```

use thiserror::Error;

use crate::core::{CalculatorEvent, Operator};

/// Errors raised at the keypad boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    /// The label does not belong to any button
    #[error("Unknown label: {label:?}")]
    UnknownLabel {
        /// The rejected label
        label: String,
    },
}

impl KeypadError {
    /// Create an unknown label error
    #[must_use]
    pub fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            label: label.into(),
        }
    }
}

/// Maps a button label to the event it produces
///
/// Both the typographic minus (U+2212) printed on the button and the ASCII
/// hyphen select subtraction. Labels are matched exactly.
pub fn event_for_label(label: &str) -> Result<CalculatorEvent, KeypadError> {
    if let [digit @ b'0'..=b'9'] = label.as_bytes() {
        return Ok(CalculatorEvent::Digit(digit - b'0'));
    }
    if let Some(op) = Operator::from_symbol(label) {
        return Ok(CalculatorEvent::Operator(op));
    }
    match label {
        "." => Ok(CalculatorEvent::Decimal),
        "=" => Ok(CalculatorEvent::Equals),
        "C" => Ok(CalculatorEvent::Clear),
        "AC" => Ok(CalculatorEvent::AllClear),
        _ => Err(KeypadError::unknown_label(label)),
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text printed on the button
    pub label: &'static str,
    /// The event this button sends
    pub event: CalculatorEvent,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    fn new(label: &'static str, row: usize, col: usize) -> Option<Self> {
        event_for_label(label).ok().map(|event| Self {
            label,
            event,
            row,
            col,
        })
    }
}

const LAYOUT: [&[&str]; 5] = [
    &["7", "8", "9", "÷"],
    &["4", "5", "6", "×"],
    &["1", "2", "3", "−"],
    &["0", ".", "=", "+"],
    &["AC", "C"],
];

/// The calculator's button grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = LAYOUT
            .iter()
            .enumerate()
            .flat_map(|(row, labels)| {
                labels
                    .iter()
                    .enumerate()
                    .filter_map(move |(col, label)| KeypadButton::new(*label, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: LAYOUT.len(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the number of rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Gets all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the buttons of one row
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by its printed label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Finds the button that sends an event
    #[must_use]
    pub fn find_button_by_event(&self, event: CalculatorEvent) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.event == event)
    }

    /// Returns all labels in row-major order
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.buttons.iter().map(|b| b.label).collect()
    }

    /// Resolves a pressed label into its event
    ///
    /// Accepts any label [`event_for_label`] accepts, including the ASCII
    /// hyphen that has no button of its own.
    pub fn press(&self, label: &str) -> Result<CalculatorEvent, KeypadError> {
        match self.find_button_by_label(label) {
            Some(button) => Ok(button.event),
            None => event_for_label(label),
        }
    }
}
