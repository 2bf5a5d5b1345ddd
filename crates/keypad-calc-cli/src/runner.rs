//! Command execution
//!
//! Runners take their input and output streams as arguments so the
//! binary passes stdin/stdout and tests pass in-memory buffers.

use crate::commands::PressArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;
use keypad_calc::prelude::*;
use serde::Serialize;
use std::io::{BufRead, Read, Write};
use tracing::{debug, info};

/// Display after a single press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressStep {
    /// The label that was pressed
    pub label: String,
    /// The display afterwards
    pub display: String,
}

/// JSON report of a press run
#[derive(Debug, Clone, Serialize)]
pub struct PressReport {
    /// Final display
    pub display: String,
    /// Final accumulator state
    pub state: CalculatorState,
    /// Per-press displays, with `--each`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<PressStep>>,
    /// Completed calculations, oldest first, with `--history`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryEntry>>,
}

/// Collects labels from the arguments, or from `input` when there are none
pub fn collect_labels(args: &PressArgs, mut input: impl BufRead) -> CliResult<Vec<String>> {
    if !args.labels.is_empty() {
        return Ok(args.labels.clone());
    }
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    Ok(buf.split_whitespace().map(str::to_string).collect())
}

/// Runs the `press` command
pub fn run_press(
    config: &CliConfig,
    args: &PressArgs,
    input: impl BufRead,
    out: &mut impl Write,
) -> CliResult<()> {
    let labels = collect_labels(args, input)?;
    info!(presses = labels.len(), "starting session");

    let mut session = Session::with_config(config.session.clone());
    let mut steps = Vec::with_capacity(labels.len());
    for label in &labels {
        let display = session.press(label)?;
        steps.push(PressStep {
            label: label.clone(),
            display,
        });
    }
    debug!(calculations = session.calculations().len(), "session finished");

    match config.format {
        OutputFormat::Text => {
            if args.each {
                for step in &steps {
                    writeln!(out, "{}", step.display)?;
                }
            } else {
                writeln!(out, "{}", session.display())?;
            }
            if args.history && !session.calculations().is_empty() {
                writeln!(out, "{}", session.calculations().export_formatted())?;
            }
        }
        OutputFormat::Json => {
            let snapshot = session.snapshot();
            let report = PressReport {
                display: snapshot.display,
                state: snapshot.state,
                steps: args.each.then_some(steps),
                history: args.history.then_some(snapshot.history),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

/// Runs the `keys` command
pub fn run_keys(format: OutputFormat, out: &mut impl Write) -> CliResult<()> {
    let keypad = Keypad::new();
    let rows: Vec<Vec<&str>> = (0..keypad.rows())
        .map(|r| keypad.row(r).map(|button| button.label).collect())
        .collect();

    match format {
        OutputFormat::Text => {
            for row in &rows {
                writeln!(out, "{}", row.join(" "))?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(&rows)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::commands::FormatArg;
    use crate::error::CliError;
    use std::io::Cursor;

    fn press_args(labels: &[&str]) -> PressArgs {
        PressArgs {
            labels: labels.iter().map(|s| (*s).to_string()).collect(),
            each: false,
            history: false,
            format: FormatArg::Text,
        }
    }

    fn run(config: &CliConfig, args: &PressArgs, stdin: &str) -> CliResult<String> {
        let mut out = Vec::new();
        run_press(config, args, Cursor::new(stdin.to_string()), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_press_prints_final_display() {
        let out = run(&CliConfig::new(), &press_args(&["1", "+", "2", "="]), "").unwrap();
        assert_eq!(out, "3\n");
    }

    #[test]
    fn test_press_division_by_zero() {
        let out = run(&CliConfig::new(), &press_args(&["5", "÷", "0", "="]), "").unwrap();
        assert_eq!(out, "Error\n");
    }

    #[test]
    fn test_press_no_labels_shows_zero() {
        let out = run(&CliConfig::new(), &press_args(&[]), "").unwrap();
        assert_eq!(out, "0\n");
    }

    #[test]
    fn test_press_reads_stdin() {
        let out = run(&CliConfig::new(), &press_args(&[]), "9 −\n4\n=\n").unwrap();
        assert_eq!(out, "5\n");
    }

    #[test]
    fn test_labels_take_precedence_over_stdin() {
        let out = run(&CliConfig::new(), &press_args(&["7"]), "1 + 1 =").unwrap();
        assert_eq!(out, "7\n");
    }

    #[test]
    fn test_press_each() {
        let mut args = press_args(&["1", "+", "2", "="]);
        args.each = true;
        let out = run(&CliConfig::new(), &args, "").unwrap();
        assert_eq!(out, "1\n1+\n1+2\n3\n");
    }

    #[test]
    fn test_press_history_text() {
        let mut args = press_args(&["2", "×", "3", "=", "C", "1", "+", "1", "="]);
        args.history = true;
        let out = run(&CliConfig::new(), &args, "").unwrap();
        assert_eq!(out, "2\n2×3 = 6\n1+1 = 2\n");
    }

    #[test]
    fn test_press_history_disabled() {
        let mut args = press_args(&["2", "×", "3", "="]);
        args.history = true;
        let config = CliConfig::new().with_max_history(0);
        let out = run(&config, &args, "").unwrap();
        assert_eq!(out, "6\n");
    }

    #[test]
    fn test_press_unknown_label_fails() {
        let err = run(&CliConfig::new(), &press_args(&["1", "%"]), "").unwrap_err();
        assert!(matches!(err, CliError::Keypad(_)));
        assert_eq!(err.to_string(), "Unknown label: \"%\"");
    }

    #[test]
    fn test_press_json_report() {
        let mut args = press_args(&["8", "÷", "2", "="]);
        args.history = true;
        let config = CliConfig::new().with_format(OutputFormat::Json);
        let out = run(&config, &args, "").unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["display"], "4");
        assert_eq!(value["state"]["first_operand"], "4");
        assert_eq!(value["state"]["just_calculated"], true);
        assert_eq!(value["history"][0]["expression"], "8÷2");
        assert_eq!(value["history"][0]["result"], "4");
        assert!(value.get("steps").is_none());
    }

    #[test]
    fn test_press_json_steps() {
        let mut args = press_args(&["4", "."]);
        args.each = true;
        let config = CliConfig::new().with_format(OutputFormat::Json);
        let out = run(&config, &args, "").unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["steps"][0]["label"], "4");
        assert_eq!(value["steps"][1]["display"], "4.");
        assert!(value.get("history").is_none());
    }

    #[test]
    fn test_keys_text() {
        let mut out = Vec::new();
        run_keys(OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "7 8 9 ÷");
        assert_eq!(lines[3], "0 . = +");
        assert_eq!(lines[4], "AC C");
    }

    #[test]
    fn test_keys_json() {
        let mut out = Vec::new();
        run_keys(OutputFormat::Json, &mut out).unwrap();
        let rows: Vec<Vec<String>> = serde_json::from_slice(&out).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2], vec!["1", "2", "3", "−"]);
    }
}
