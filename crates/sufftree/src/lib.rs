//! sufftree: suffix trees over sentinel-terminated symbol sequences.
//!
//! Three constructors build the same tree: a naive quadratic one, McCreight's
//! linear-time construction with suffix links, and a linear climb over a
//! suffix array plus LCP array. Once built, a tree answers substring
//! queries in time proportional to the pattern plus the number of matches.
//!
//! # Example
//!
//! ```
//! use sufftree::SuffixTree;
//!
//! let tree = SuffixTree::new("mississippi").expect("small alphabet");
//! assert_eq!(tree.search_sorted("iss"), vec![1, 4]);
//! assert!(!tree.contains("sss"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod build;
pub mod dump;
pub mod node;
pub mod query;
pub mod store;
pub mod trace;
pub mod tree;
pub mod verify;
pub mod walk;

mod invariants;

pub use build::Algorithm;
pub use dump::{DumpFormat, TreePrinter};
pub use node::{Label, Node, NodeId, NodeKind};
pub use query::Leaves;
pub use store::NodeStore;
pub use trace::{BuildStats, BuildTracer, NoopTracer, PrintTracer, Scan};
pub use tree::SuffixTree;
pub use verify::InvariantViolation;
pub use walk::Landing;

pub use sufftree_core::{Alphabet, AlphabetError, Colors, EncodedSeq, SENTINEL};

/// Errors raised while preparing a tree's input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),

    #[error("suffix array has {actual} entries, the sequence has {expected} suffixes")]
    SuffixArrayLength { expected: usize, actual: usize },

    /// A position is out of range or listed twice.
    #[error("suffix array is not a permutation: position {0} is out of range or repeated")]
    NotAPermutation(usize),

    #[error("LCP array has {actual} entries, the sequence has {expected} suffixes")]
    LcpArrayLength { expected: usize, actual: usize },

    #[error("LCP value {value} at index {index} reaches past the end of a suffix")]
    LcpTooLong { index: usize, value: usize },

    /// Well-shaped arrays that do not describe the sequence's suffix order.
    #[error("suffix and LCP arrays do not match the sequence: {0}")]
    InconsistentArrays(InvariantViolation),
}

/// Result type for tree construction.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod store_tests;
#[cfg(test)]
mod trace_tests;
