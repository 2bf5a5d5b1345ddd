//! Keypad calculator CLI
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc press 1 + 2 =            # prints 3
//! keypad-calc press --each 4 . 5 × 2 = # display after every press
//! echo "9 − 4 =" | keypad-calc press   # labels from stdin
//! keypad-calc keys                     # keypad layout
//! ```

use clap::Parser;
use keypad_calc_cli::{logging, Cli, CliConfig, CliResult, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(config.verbosity);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Press(args) => {
            let config = config.with_format(args.format.into());
            keypad_calc_cli::run_press(&config, &args, std::io::stdin().lock(), &mut out)
        }
        Commands::Keys(args) => keypad_calc_cli::run_keys(args.format.into(), &mut out),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    CliConfig::new()
        .with_verbosity(verbosity)
        .with_max_history(cli.max_history)
}
