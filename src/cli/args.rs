//! Defines the command-line arguments and subcommands for the `pretty` CLI.
//!
//! This module uses the `clap` crate with its "derive" feature. Global flags
//! override the values loaded from the config file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::{ColorMode, OutputFormat};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "pretty",
    version,
    about = "Category-dispatched comparison, scope guards, error codes and bounded iteration."
)]
pub struct PrettyArgs {
    /// Path to a YAML config file. Defaults to ./pretty.yaml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// When to colorize output.
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Output format for reports.
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the built-in property checks.
    Check {
        /// Only run checks whose name contains this text.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Compare two literals of one category.
    Equal {
        /// Category name or alias (int, uint, f32, f64, long-double, str, bool, ptr).
        category: String,
        /// Left operand.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Right operand.
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Print a literal under its category's format policy.
    Show {
        /// Category name or alias.
        category: String,
        /// The literal to print.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the integers from START toward TARGET (exclusive).
    Range {
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        target: i64,
        /// Step magnitude. The direction comes from START and TARGET.
        #[arg(long, allow_negative_numbers = true)]
        by: Option<i64>,
    },
    /// Describe an error code, by name (EDOM) or number (33).
    Errno {
        code: String,
    },
    /// List the value categories and their policies.
    Categories,
}
