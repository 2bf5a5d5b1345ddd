//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Keypad calculator: feed button presses, read the display
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Maximum number of completed calculations kept (0 disables history)
    #[arg(
        long,
        env = "KEYPAD_CALC_MAX_HISTORY",
        default_value = "100",
        global = true
    )]
    pub max_history: usize,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keypad buttons and print the display
    ///
    /// Labels: 0-9 . + − (or -) × ÷ = C AC
    Press(PressArgs),

    /// Show the keypad layout
    Keys(KeysArgs),
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Button labels in press order (read from stdin when omitted)
    pub labels: Vec<String>,

    /// Print the display after every press
    #[arg(long)]
    pub each: bool,

    /// Also print the completed calculations
    #[arg(long)]
    pub history: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

/// Arguments for the keys command
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text
    #[default]
    Text,
    /// JSON document
    Json,
}

impl From<FormatArg> for crate::config::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
