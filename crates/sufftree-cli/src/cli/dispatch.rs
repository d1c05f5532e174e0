//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use sufftree::{Algorithm, DumpFormat};

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::input::TextInput;
use crate::commands::search::SearchArgs;
use crate::commands::trace::TraceArgs;

pub struct SearchParams {
    pub patterns: Vec<String>,
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub algorithm: Algorithm,
    pub sorted: bool,
    pub json: bool,
}

impl SearchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            patterns: m
                .get_many::<String>("patterns")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            text: m.get_one::<String>("text").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            algorithm: parse_algorithm(m),
            sorted: m.get_flag("sorted"),
            json: m.get_flag("json"),
        }
    }
}

impl From<SearchParams> for SearchArgs {
    fn from(p: SearchParams) -> Self {
        Self {
            input: TextInput {
                text: p.text,
                file: p.file,
            },
            patterns: p.patterns,
            algorithm: p.algorithm,
            sorted: p.sorted,
            json: p.json,
        }
    }
}

pub struct DumpParams {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub algorithm: Algorithm,
    pub format: DumpFormat,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("dot") => DumpFormat::Dot,
            _ => DumpFormat::Text,
        };
        Self {
            text: m.get_one::<String>("text").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            algorithm: parse_algorithm(m),
            format,
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: TextInput {
                text: p.text,
                file: p.file,
            },
            algorithm: p.algorithm,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub algorithm: Algorithm,
    pub stats: bool,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            text: m.get_one::<String>("text").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            algorithm: parse_algorithm(m),
            stats: m.get_flag("stats"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            input: TextInput {
                text: p.text,
                file: p.file,
            },
            algorithm: p.algorithm,
            stats: p.stats,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_algorithm(m: &ArgMatches) -> Algorithm {
    m.get_one::<String>("algo")
        .and_then(|name| Algorithm::from_name(name))
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
