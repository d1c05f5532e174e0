//! Downward walks shared by every constructor and by queries.
//!
//! [`NodeStore::search`] compares symbols. [`NodeStore::fast_scan`] only
//! looks at edge lengths and requires the scanned path to exist. Both report
//! where they stopped as a [`Landing`] and never mutate the store.

use crate::node::NodeId;
use crate::store::NodeStore;
use crate::trace::{BuildTracer, Scan};

/// Where a walk stopped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Landing {
    /// Stopped on `node`; `pattern[consumed..]` is unmatched.
    Node { node: NodeId, consumed: usize },
    /// Stopped on the edge into `child`.
    ///
    /// `pattern[consumed..]` was left when the edge was entered and its first
    /// `matched` symbols agree with the edge label. `matched` may equal the
    /// label length when the pattern ran out exactly at `child`.
    Edge {
        child: NodeId,
        consumed: usize,
        matched: usize,
    },
}

/// Length of the common prefix of `a` and `b`.
#[inline]
pub(crate) fn shared_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl NodeStore {
    /// Descend from `from` along `pattern`, comparing symbols.
    ///
    /// Stops on a node when the pattern is exhausted before an edge or no
    /// child starts with the next symbol. Stops on an edge when the pattern
    /// ends inside it, mismatches it, or continues past the end of a leaf.
    pub fn search<T: BuildTracer>(
        &self,
        seq: &[u8],
        from: NodeId,
        pattern: &[u8],
        tracer: &mut T,
    ) -> Landing {
        let mut node = from;
        let mut consumed = 0;

        loop {
            let rest = &pattern[consumed..];
            let Some(child) = rest.first().and_then(|&s| self.node(node).child(s)) else {
                return Landing::Node { node, consumed };
            };

            let label = &seq[self.label(child).range()];
            let matched = shared_prefix(label, rest);
            tracer.trace_scan(Scan::Slow, child, matched);

            // Only a pattern holding the sentinel can run off the end of a leaf.
            if matched == rest.len() || matched < label.len() || self.node(child).is_leaf() {
                return Landing::Edge {
                    child,
                    consumed,
                    matched,
                };
            }

            node = child;
            consumed += matched;
        }
    }

    /// Descend from `from` along `pattern` using edge lengths only.
    ///
    /// The caller guarantees that `pattern` is spelled by a path below
    /// `from`; a missing child is a broken invariant, not a mismatch.
    pub fn fast_scan<T: BuildTracer>(
        &self,
        from: NodeId,
        pattern: &[u8],
        tracer: &mut T,
    ) -> Landing {
        let mut node = from;
        let mut consumed = 0;

        while consumed < pattern.len() {
            let rest = pattern.len() - consumed;
            let child = self.ensure_child(node, pattern[consumed]);
            let step = self.label(child).len().min(rest);
            tracer.trace_scan(Scan::Fast, child, step);

            if step == rest {
                return Landing::Edge {
                    child,
                    consumed,
                    matched: step,
                };
            }

            node = self.ensure_inner(child);
            consumed += step;
        }

        Landing::Node { node, consumed }
    }
}
