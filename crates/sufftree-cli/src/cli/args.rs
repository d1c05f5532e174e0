//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use sufftree::Algorithm;

/// Inline text to index (-t/--text).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .help("Text to index")
}

/// Text file to index (-f/--file).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File to index (use \"-\" for stdin)")
}

/// Construction algorithm (--algo).
pub fn algo_arg() -> Arg {
    Arg::new("algo")
        .long("algo")
        .value_name("ALGO")
        .default_value(Algorithm::default().name())
        .value_parser(Algorithm::ALL.map(Algorithm::name))
        .help("Construction algorithm")
}

/// Patterns to look up (positional, one or more).
pub fn patterns_arg() -> Arg {
    Arg::new("patterns")
        .value_name("PATTERN")
        .required(true)
        .num_args(1..)
        .help("Patterns to search for")
}

/// Sort positions ascending (--sorted).
pub fn sorted_arg() -> Arg {
    Arg::new("sorted")
        .long("sorted")
        .action(ArgAction::SetTrue)
        .help("Print positions in ascending order instead of suffix order")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print results as JSON")
}

/// Dump format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "dot"])
        .help("Output format")
}

/// Print work counters after the trace (--stats).
pub fn stats_arg() -> Arg {
    Arg::new("stats")
        .long("stats")
        .action(ArgAction::SetTrue)
        .help("Print construction statistics after the trace")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
