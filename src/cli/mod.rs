//! # Command-Line Interface
//!
//! The `pretty` binary: a thin shell over the library for trying the
//! constructs from a terminal and for running the built-in self-checks.
//!
//! ## Module Structure
//!
//! - **`args`**: clap definitions
//! - **`config`**: YAML config file and flag overrides
//! - **`literal`**: category-directed parsing of command-line literals
//! - **`checks`**: the self-check registry
//! - **`output`**: colored text and JSON rendering

use std::process;

use clap::Parser;

pub mod args;
pub mod checks;
pub mod config;
pub mod literal;
pub mod output;

pub use args::{Command, PrettyArgs};
pub use checks::{register_std_checks, CheckFn, CheckRegistry, CheckReport, CheckResult, STD_CHECKS};
pub use config::{ColorMode, Config, OutputFormat};
pub use literal::{parse_category, Literal, ParsedLiteral};

use crate::err_ctx;
use crate::errors::{print_error, PrettyError, Span};
use crate::iter::{forrange, forrange_by};
use crate::signal::ErrorCode;

/// The main entry point for the CLI.
pub fn run() {
    let args = PrettyArgs::parse();
    match execute(args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            print_error(e);
            process::exit(1);
        }
    }
}

/// Runs one command. `Ok(false)` means the command ran but reported failure.
pub fn execute(args: PrettyArgs) -> Result<bool, PrettyError> {
    let config = Config::load(args.config.as_deref())?.with_overrides(args.color, args.format);

    match args.command {
        Command::Check { filter } => {
            let report = STD_CHECKS.run(filter.as_deref());
            if report.results.is_empty() {
                eprintln!(
                    "[pretty:check] no checks match '{}'",
                    filter.as_deref().unwrap_or_default()
                );
            }
            output::print_check_report(&report, &config);
            Ok(report.all_passed())
        }

        Command::Equal { category, a, b } => {
            let category = parse_category(&category)?;
            let a = ParsedLiteral::parse(category, &a)?;
            let b = ParsedLiteral::parse(category, &b)?;
            output::print_equal(&a, &b, a.equals(&b), &config);
            Ok(true)
        }

        Command::Show { category, value } => {
            let category = parse_category(&category)?;
            let literal = ParsedLiteral::parse(category, &value)?;
            output::print_show(&literal, &config);
            Ok(true)
        }

        Command::Range { start, target, by } => {
            match by {
                Some(by) => output::print_range(forrange_by(start, target, by)?, &config),
                None => output::print_range(forrange(start, target), &config),
            }
            Ok(true)
        }

        Command::Errno { code } => {
            let parsed = ErrorCode::parse(&code).ok_or_else(|| {
                err_ctx!(
                    Parse,
                    format!("unknown error code '{code}'"),
                    code.as_str(),
                    Span::covering(&code),
                    "use a number or a name such as EDOM, ERANGE, EINVAL"
                )
            })?;
            output::print_errno(parsed, &config);
            Ok(true)
        }

        Command::Categories => {
            output::print_categories(&config);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> PrettyArgs {
        PrettyArgs::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn negative_operands_are_not_flags() {
        let parsed = args(&["pretty", "range", "5", "-3", "--by", "-2"]);
        match parsed.command {
            Command::Range { start, target, by } => {
                assert_eq!((start, target, by), (5, -3, Some(-2)));
            }
            other => panic!("unexpected command {other:?}"),
        }
        let parsed = args(&["pretty", "equal", "int", "-1", "-1"]);
        assert!(matches!(parsed.command, Command::Equal { .. }));
    }

    #[test]
    fn global_flags_parse_after_the_subcommand() {
        let parsed = args(&["pretty", "categories", "--format", "json", "--color", "never"]);
        assert_eq!(parsed.format, Some(OutputFormat::Json));
        assert_eq!(parsed.color, Some(ColorMode::Never));
    }

    #[test]
    fn bad_literals_are_errors() {
        let err = execute(args(&["pretty", "--color", "never", "equal", "f64", "1.0", "one"]))
            .expect_err("not a float");
        assert!(matches!(err, PrettyError::Parse { .. }));
    }

    #[test]
    fn zero_step_is_an_error() {
        let err = execute(args(&["pretty", "range", "0", "10", "--by", "0"])).expect_err("zero step");
        assert!(matches!(err, PrettyError::ZeroStep { .. }));
    }

    #[test]
    fn unknown_errno_is_an_error() {
        let err = execute(args(&["pretty", "errno", "EWHATEVER"])).expect_err("unknown name");
        assert!(matches!(err, PrettyError::Parse { .. }));
    }
}
