//! Report every occurrence of each pattern.

use serde::Serialize;
use sufftree::{Algorithm, SuffixTree};

use super::input::{TextInput, fail};

pub struct SearchArgs {
    pub input: TextInput,
    pub patterns: Vec<String>,
    pub algorithm: Algorithm,
    pub sorted: bool,
    pub json: bool,
}

/// Occurrences of one pattern, as printed by `--json`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Matches {
    pub pattern: String,
    pub positions: Vec<usize>,
    pub count: usize,
}

pub fn run(args: SearchArgs) {
    let tree = args.input.build(args.algorithm);
    let results = find_all(&tree, &args.patterns, args.sorted);

    if args.json {
        let out = serde_json::to_string_pretty(&results).unwrap_or_else(|e| fail(e));
        println!("{out}");
    } else {
        print!("{}", render(&results));
    }
}

pub fn find_all(tree: &SuffixTree, patterns: &[String], sorted: bool) -> Vec<Matches> {
    patterns
        .iter()
        .map(|pattern| {
            let positions = if sorted {
                tree.search_sorted(pattern)
            } else {
                tree.search(pattern)
            };
            Matches {
                pattern: pattern.clone(),
                count: positions.len(),
                positions,
            }
        })
        .collect()
}

/// One `PATTERN: p1 p2 ...` line per pattern.
pub fn render(results: &[Matches]) -> String {
    let mut out = String::new();
    for m in results {
        out.push_str(&m.pattern);
        out.push(':');
        for p in &m.positions {
            out.push(' ');
            out.push_str(&p.to_string());
        }
        out.push('\n');
    }
    out
}
