//! Suffix tree constructors.
//!
//! Each constructor inserts one suffix at a time into a fresh [`NodeStore`]
//! and returns it. They differ only in how they find the insertion point:
//! - `naive`: slow scan from the root for every suffix, O(n²) worst case
//! - `mccreight`: suffix links plus fast scan, O(n)
//! - `lcp`: climbs up from the previous leaf using suffix and LCP arrays, O(n)

mod lcp;
mod mccreight;
mod naive;

use std::fmt;

pub(crate) use lcp::lcp;
pub(crate) use mccreight::mccreight;
pub(crate) use naive::naive;

use crate::invariants;
use crate::node::{Label, NodeId};
use crate::store::NodeStore;
use crate::trace::BuildTracer;
use crate::walk::Landing;

/// Construction algorithm selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Naive,
    #[default]
    McCreight,
    /// LCP-based construction over reference suffix and LCP arrays.
    Lcp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Naive, Algorithm::McCreight, Algorithm::Lcp];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::McCreight => "mccreight",
            Algorithm::Lcp => "lcp",
        }
    }

    /// Parse a name as printed by [`Algorithm::name`], ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hang suffix `suffix` off the point where a slow scan for `pattern` landed.
///
/// A landing on a node attaches the unmatched rest as a leaf. A landing
/// partway along an edge splits it there. A scan that consumed the whole
/// pattern means the sequence was not sentinel-terminated.
pub(crate) fn insert_at<T: BuildTracer>(
    store: &mut NodeStore,
    seq: &[u8],
    suffix: usize,
    pattern: Label,
    landing: Landing,
    tracer: &mut T,
) -> NodeId {
    match landing {
        Landing::Node { node, consumed } if consumed < pattern.len() => {
            store.attach_leaf(seq, node, suffix, pattern.skip(consumed), tracer)
        }
        Landing::Edge {
            child,
            consumed,
            matched,
        } if matched < pattern.len() - consumed => store.split_edge(
            seq,
            child,
            matched,
            suffix,
            pattern.skip(consumed + matched),
            tracer,
        ),
        _ => invariants::suffix_fully_matched(suffix),
    }
}
