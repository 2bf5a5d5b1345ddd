//! Keypad Calculator
//!
//! A button-driven arithmetic calculator reduced to its logic: two operands,
//! one pending operator and a display string, transformed one keypad press
//! at a time.
//!
//! - [`core`]: the state, the reducer and the arithmetic it resolves
//! - [`keypad`]: button labels and the label-to-event boundary
//! - [`driver`]: sessions that own a state and record completed calculations
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let state = CalculatorState::new()
//!     .apply(CalculatorEvent::Digit(1))
//!     .apply(CalculatorEvent::Operator(Operator::Add))
//!     .apply(CalculatorEvent::Digit(2))
//!     .apply(CalculatorEvent::Equals);
//! assert_eq!(state.display(), "3");
//!
//! // Or through the keypad labels
//! let mut session = Session::new();
//! session.press_all(&["5", "÷", "0", "="]).unwrap();
//! assert_eq!(session.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::SessionConfig;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{
        apply, format_result, CalcError, CalcResult, Calculator, CalculatorEvent,
        CalculatorState, Operator, ERROR_DISPLAY, ZERO_DISPLAY,
    };
    pub use crate::driver::{CalculatorDriver, Session, SessionSnapshot};
    pub use crate::keypad::{event_for_label, Keypad, KeypadButton, KeypadError};
}
