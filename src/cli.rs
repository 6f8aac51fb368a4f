use infixcalc::{format_tokens, Engine};
use std::path::PathBuf;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) postfix: Option<String>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) trace: bool,
    pub(crate) unknown: Option<String>,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                } else {
                    cli.unknown = Some("-c requires an expression".into());
                }
                break;
            }
            "--postfix" => {
                if i + 1 < args.len() {
                    cli.postfix = Some(args[i + 1..].join(" "));
                } else {
                    cli.unknown = Some("--postfix requires an expression".into());
                }
                break;
            }
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => cli.config = Some(PathBuf::from(path)),
                    None => {
                        cli.unknown = Some("--config requires a path".into());
                        break;
                    }
                }
            }
            "--trace" => {
                cli.trace = true;
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            other => {
                cli.unknown = Some(format!("Unknown option: {}", other));
                break;
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"infixcalc {} - evaluate infix arithmetic expressions

USAGE:
    infixcalc                       Start the interactive calculator
    infixcalc -c <expr>             Evaluate a single expression
    infixcalc --postfix <expr>      Show the postfix (RPN) form of an expression
    infixcalc --config <path>       Read settings from a TOML file
    infixcalc --trace               Log each pipeline stage to stderr
    infixcalc --help                Show this help message
    infixcalc --version             Show version

SYNTAX:
    + - * /                 Binary operators, * and / bind tighter
    ( )                     Grouping
    -5, -.5                 Sign glued to a number after an operator, '(' or at the start
    1 - 2 - 3               Equal precedence groups left to right: (1 - 2) - 3

INTERACTIVE COMMANDS:
    .help                   Show this help
    .rpn <expr>             Show the postfix form of <expr>
    quit, exit              Leave (Ctrl-D and Ctrl-C also leave)

CONFIG (~/.infixcalc.toml or $INFIXCALC_CONFIG):
    prompt = "> "           Prompt text
    banner = false          Print a banner on start (INFIXCALC_BANNER=1 also enables)
    error_label = "Error"   Prefix for error messages"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("infixcalc {}", VERSION);
}

/// Evaluate one expression and print the result
pub(crate) fn execute_command(engine: &Engine, expr: &str, error_label: &str) -> ExitCode {
    match engine.evaluate(expr) {
        Ok(result) => {
            println!("{}", infixcalc::format_number(result));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", error_label, e);
            ExitCode::FAILURE
        }
    }
}

/// Print the postfix form of one expression
pub(crate) fn execute_postfix(engine: &Engine, expr: &str, error_label: &str) -> ExitCode {
    match engine.postfix(expr) {
        Ok(postfix) => {
            println!("{}", format_tokens(&postfix));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", error_label, e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("infixcalc")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments_starts_repl() {
        assert_eq!(parse_args(&args(&[])), CliArgs::default());
    }

    #[test]
    fn command_joins_remaining_arguments() {
        let cli = parse_args(&args(&["-c", "-5", "+", "3"]));
        assert_eq!(cli.command.as_deref(), Some("-5 + 3"));
        assert!(cli.unknown.is_none());
    }

    #[test]
    fn flags_before_command() {
        let cli = parse_args(&args(&["--trace", "--config", "calc.toml", "-c", "1+1"]));
        assert!(cli.trace);
        assert_eq!(cli.config, Some(PathBuf::from("calc.toml")));
        assert_eq!(cli.command.as_deref(), Some("1+1"));
    }

    #[test]
    fn postfix_flag() {
        let cli = parse_args(&args(&["--postfix", "(1 + 2) * 3"]));
        assert_eq!(cli.postfix.as_deref(), Some("(1 + 2) * 3"));
    }

    #[test]
    fn missing_values_are_reported() {
        assert!(parse_args(&args(&["-c"])).unknown.is_some());
        assert!(parse_args(&args(&["--config"])).unknown.is_some());
    }

    #[test]
    fn unknown_option() {
        let cli = parse_args(&args(&["--frobnicate"]));
        assert_eq!(cli.unknown.as_deref(), Some("Unknown option: --frobnicate"));
    }

    #[test]
    fn help_and_version() {
        assert!(parse_args(&args(&["-h"])).help);
        assert!(parse_args(&args(&["--version"])).version);
    }
}
