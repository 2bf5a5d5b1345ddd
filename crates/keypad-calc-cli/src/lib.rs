//! Keypad Calculator CLI Library
//!
//! Replays keypad button presses against a calculator session and prints
//! what the display would show.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod runner;

pub use commands::{Cli, Commands, FormatArg, KeysArgs, PressArgs};
pub use config::{CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{collect_labels, run_keys, run_press, PressReport, PressStep};
