//! Handles all user-facing output for the CLI.
//!
//! Every command prints through here, either as colored text (`termcolor`) or
//! as one JSON document (`serde_json`), depending on the configured format.

use std::io::Write;

use serde::Serialize;
use serde_json::json;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use super::checks::CheckReport;
use super::config::{Config, OutputFormat};
use super::literal::ParsedLiteral;
use crate::dispatch::ValueCategory;
use crate::signal::ErrorCode;

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints PASS/FAIL per check followed by a summary line.
pub fn print_check_report(report: &CheckReport, config: &Config) {
    if config.format == OutputFormat::Json {
        print_json(report);
        return;
    }
    let mut stdout = StandardStream::stdout(config.color.choice());
    for result in &report.results {
        if result.passed {
            write_tag(&mut stdout, "PASS", Color::Green);
            let _ = writeln!(stdout, " {}", result.name);
        } else {
            write_tag(&mut stdout, "FAIL", Color::Red);
            let _ = writeln!(stdout, " {}", result.name);
            if let Some(message) = &result.message {
                let _ = writeln!(stdout, "       {message}");
            }
        }
    }
    let _ = writeln!(stdout);
    let color = if report.all_passed() { Color::Green } else { Color::Red };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = writeln!(
        stdout,
        "{} passed, {} failed, {} total",
        report.passed,
        report.failed,
        report.results.len()
    );
    let _ = stdout.reset();
}

/// Prints the verdict of an `equal` comparison.
pub fn print_equal(a: &ParsedLiteral, b: &ParsedLiteral, equal: bool, config: &Config) {
    if config.format == OutputFormat::Json {
        print_json(&json!({
            "category": a.category,
            "policy": a.category.comparison(),
            "a": a.to_text(),
            "b": b.to_text(),
            "equal": equal,
        }));
        return;
    }
    let mut stdout = StandardStream::stdout(config.color.choice());
    let (verdict, color) = if equal {
        ("equal", Color::Green)
    } else {
        ("not equal", Color::Red)
    };
    let _ = write!(stdout, "{} and {} are ", a.to_text(), b.to_text());
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(stdout, "{verdict}");
    let _ = stdout.reset();
    let _ = writeln!(stdout, " ({})", a.category.comparison());
}

/// Prints a literal under its category's format policy.
pub fn print_show(literal: &ParsedLiteral, config: &Config) {
    if config.format == OutputFormat::Json {
        print_json(&json!({
            "category": literal.category,
            "policy": literal.category.format(),
            "text": literal.to_text(),
        }));
        return;
    }
    let mut stdout = StandardStream::stdout(config.color.choice());
    let _ = writeln!(stdout, "{}", literal.to_text());
}

/// Prints the values of a range, one per line.
pub fn print_range(values: impl Iterator<Item = i64>, config: &Config) {
    if config.format == OutputFormat::Json {
        print_json(&values.collect::<Vec<_>>());
        return;
    }
    let mut stdout = StandardStream::stdout(config.color.choice());
    for value in values {
        let _ = writeln!(stdout, "{value}");
    }
}

/// Describes an error code.
pub fn print_errno(code: ErrorCode, config: &Config) {
    if config.format == OutputFormat::Json {
        print_json(&json!({
            "code": code,
            "name": code.name(),
            "description": code.description(),
            "is_error": code.is_error(),
        }));
        return;
    }
    let mut stdout = StandardStream::stdout(config.color.choice());
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    let _ = write!(stdout, "{:>4}", code.raw());
    let _ = stdout.reset();
    let _ = writeln!(stdout, " {code}");
}

/// Prints the category table: comparison and format policy per category.
pub fn print_categories(config: &Config) {
    if config.format == OutputFormat::Json {
        let rows: Vec<_> = ValueCategory::ALL
            .iter()
            .map(|c| json!({ "category": c, "comparison": c.comparison(), "format": c.format() }))
            .collect();
        print_json(&rows);
        return;
    }
    let mut stdout = StandardStream::stdout(config.color.choice());
    for category in ValueCategory::ALL {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
        let _ = write!(stdout, "{:<18}", category.name());
        let _ = stdout.reset();
        let _ = writeln!(
            stdout,
            "{:<24} {}",
            category.comparison().to_string(),
            category.format()
        );
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_tag(stdout: &mut StandardStream, tag: &str, color: Color) {
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(stdout, "{tag}");
    let _ = stdout.reset();
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("[pretty:print_json] failed to serialize report: {e}"),
    }
}
