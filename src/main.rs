//! infixcalc - interactive infix arithmetic calculator
//!
//! Usage:
//!   infixcalc                 Start the interactive loop
//!   infixcalc -c "expr"       Evaluate a single expression
//!   infixcalc --postfix "expr" Show the postfix form of an expression

mod cli;
mod config;
mod repl;

use cli::{execute_command, execute_postfix, parse_args, print_help, print_version};
use config::load_config;
use infixcalc::Engine;
use repl::run_repl;
use std::env;
use std::process::ExitCode;

/// Logs go to stderr; `--trace` shows each pipeline stage
fn init_logging(trace: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if trace {
        builder.filter_module("infixcalc", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    init_logging(cli.trace);

    if let Some(problem) = cli.unknown {
        eprintln!("{}", problem);
        eprintln!("Run 'infixcalc --help' for usage");
        return ExitCode::from(2);
    }

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let config = load_config(cli.config.as_deref());
    let engine = Engine::new();

    if let Some(expr) = cli.command {
        return execute_command(&engine, &expr, &config.error_label);
    }

    if let Some(expr) = cli.postfix {
        return execute_postfix(&engine, &expr, &config.error_label);
    }

    match run_repl(engine, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
