use infixcalc::{format_number, format_tokens, Engine};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::fmt::Display;

use crate::cli::print_help;
use crate::config::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What a line of input asks for
#[derive(Debug, PartialEq)]
enum Directive<'a> {
    Quit,
    Help,
    Rpn(&'a str),
    Evaluate(&'a str),
}

fn classify(line: &str) -> Directive<'_> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
        return Directive::Quit;
    }
    if trimmed == ".help" || trimmed == ".h" {
        return Directive::Help;
    }
    if let Some(expr) = trimmed.strip_prefix(".rpn") {
        if expr.is_empty() || expr.starts_with(char::is_whitespace) {
            return Directive::Rpn(expr);
        }
    }
    Directive::Evaluate(line)
}

fn error_line(label: &str, err: impl Display) -> String {
    format!("{}: {}", label, err)
}

/// Run the read-evaluate-print loop until quit, Ctrl-D or Ctrl-C
pub(crate) fn run_repl(engine: Engine, config: &Config) -> RlResult<()> {
    let mut rl = DefaultEditor::new()?;

    if config.banner {
        println!("infixcalc {} - infix arithmetic calculator", VERSION);
        println!("  Type 'quit' or Ctrl-D to leave, '.help' for usage");
    }

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => match classify(&line) {
                Directive::Quit => break,
                Directive::Help => print_help(),
                Directive::Rpn(expr) => match engine.postfix(expr) {
                    Ok(postfix) => println!("{}", format_tokens(&postfix)),
                    Err(e) => eprintln!("{}", error_line(&config.error_label, e)),
                },
                Directive::Evaluate(expr) => match engine.evaluate(expr) {
                    Ok(result) => println!("{}", format_number(result)),
                    Err(e) => eprintln!("{}", error_line(&config.error_label, e)),
                },
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                // Ctrl-C / Ctrl-D - leave quietly
                break;
            }
            Err(err) => {
                eprintln!("{}", error_line(&config.error_label, err));
                break;
            }
        }
    }

    Ok(())
}
