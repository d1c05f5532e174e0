//! Command builders for the CLI.
//!
//! Every command indexes one text given either inline (`-t`) or from a file
//! (`-f`). The two are an exclusive, required group.

use clap::{ArgGroup, Command};

use super::args::*;

/// Add the text input pair and the algorithm selector.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(text_arg())
        .arg(file_arg())
        .group(
            ArgGroup::new("input")
                .args(["text", "file"])
                .required(true)
                .multiple(false),
        )
        .arg(algo_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("sufftree")
        .about("Build, inspect and query suffix trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(search_command())
        .subcommand(dump_command())
        .subcommand(trace_command())
}

/// Find every occurrence of one or more patterns.
pub fn search_command() -> Command {
    let cmd = Command::new("search")
        .about("Find every occurrence of each pattern")
        .override_usage(
            "\
  sufftree search <PATTERN>... -t <TEXT>
  sufftree search <PATTERN>... -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  sufftree search iss ssi -t mississippi     # positions in suffix order
  sufftree search iss -t mississippi --sorted
  sufftree search the -f book.txt --json
  cat book.txt | sufftree search the -f -"#,
        )
        .arg(patterns_arg())
        .arg(sorted_arg())
        .arg(json_arg());

    with_input_args(cmd)
}

/// Print the tree.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print the suffix tree")
        .after_help(
            r#"EXAMPLES:
  sufftree dump -t banana                    # indented text, suffix links shown
  sufftree dump -t banana --algo naive
  sufftree dump -t banana --format dot | dot -Tsvg > banana.svg"#,
        )
        .arg(format_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Print construction events.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace tree construction suffix by suffix")
        .after_help(
            r#"EXAMPLES:
  sufftree trace -t abab                     # McCreight events
  sufftree trace -t abab --algo lcp --stats"#,
        )
        .arg(stats_arg())
        .arg(color_arg());

    with_input_args(cmd)
}
