// sentieval/src/main.rs
//! Sentieval entry point.
//!
//! Parses the flags, initializes logging and runs the evaluation. Without
//! `--filename` the usage text is printed to stdout and the process exits 0.

use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use sentieval::cli::Cli;
use sentieval::commands::evaluate::{run_evaluate_stdout, EvaluateOptions, OutputMode};
use sentieval::logger;
use sentieval::ui::output_format::print_error_message;

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(args.log_level());

    let Some(dataset) = args.filename.clone() else {
        let mut command = Cli::command();
        if command.print_help().is_err() {
            return ExitCode::FAILURE;
        }
        println!();
        return ExitCode::SUCCESS;
    };

    let output = if args.json {
        OutputMode::Json
    } else if args.show_matrix {
        OutputMode::MetricsAndMatrix
    } else {
        OutputMode::Metrics
    };

    let opts = EvaluateOptions {
        dataset,
        config_path: args.config.clone(),
        overrides: args.overrides(),
        output,
    };

    match run_evaluate_stdout(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let supports_color = io::stderr().is_terminal();
            let _ = print_error_message(&mut io::stderr(), &format!("{:#}", e), supports_color);
            ExitCode::FAILURE
        }
    }
}
