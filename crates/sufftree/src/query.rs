//! Substring queries over a finished tree.
//!
//! A pattern occurs wherever a leaf sits below the point where a full search
//! for it ends. Leaves are enumerated with an explicit stack in increasing
//! key order, which is suffix-lexicographic order because the sentinel is
//! the smallest symbol.

use crate::node::{NodeId, NodeKind};
use crate::store::NodeStore;
use crate::trace::NoopTracer;
use crate::tree::SuffixTree;
use crate::walk::Landing;

impl SuffixTree {
    /// Start positions of every occurrence of `pattern`, in suffix order.
    ///
    /// A pattern with a letter outside the tree's alphabet has no matches.
    /// The empty pattern matches at every position, the sentinel included.
    pub fn search(&self, pattern: &str) -> Vec<usize> {
        self.occurrences(pattern).collect()
    }

    /// Like [`SuffixTree::search`], positions ascending.
    pub fn search_sorted(&self, pattern: &str) -> Vec<usize> {
        let mut positions = self.search(pattern);
        positions.sort_unstable();
        positions
    }

    /// Whether `pattern` occurs at all. Stops at the first leaf.
    pub fn contains(&self, pattern: &str) -> bool {
        self.occurrences(pattern).next().is_some()
    }

    /// Lazy iterator over the occurrences of `pattern`.
    pub fn occurrences(&self, pattern: &str) -> Leaves<'_> {
        match self.alphabet().encode(pattern) {
            Ok(symbols) => self.occurrences_encoded(&symbols),
            Err(_) => Leaves::empty(self.store()),
        }
    }

    /// [`SuffixTree::search`] for an already encoded pattern.
    pub fn search_encoded(&self, pattern: &[u8]) -> Vec<usize> {
        self.occurrences_encoded(pattern).collect()
    }

    pub fn occurrences_encoded(&self, pattern: &[u8]) -> Leaves<'_> {
        match self.locate(pattern) {
            Some(node) => self.leaves(node),
            None => Leaves::empty(self.store()),
        }
    }

    /// Topmost node whose subtree holds every occurrence of `pattern`.
    pub fn locate(&self, pattern: &[u8]) -> Option<NodeId> {
        let seq = self.sequence().symbols();
        let landing = self
            .store()
            .search(seq, NodeId::ROOT, pattern, &mut NoopTracer);

        match landing {
            Landing::Node { node, consumed } if consumed == pattern.len() => Some(node),
            Landing::Edge {
                child,
                consumed,
                matched,
            } if consumed + matched == pattern.len() => Some(child),
            _ => None,
        }
    }

    /// Suffix positions of all leaves below `node`, in key order.
    pub fn leaves(&self, node: NodeId) -> Leaves<'_> {
        Leaves {
            store: self.store(),
            stack: vec![node],
        }
    }

    /// The suffix array of the sequence, read off the leaves.
    pub fn suffix_array(&self) -> Vec<usize> {
        self.leaves(NodeId::ROOT).collect()
    }

    /// LCP array matching [`SuffixTree::suffix_array`], with `lcp[0] = 0`.
    ///
    /// Consecutive leaves share exactly the path to their lowest common
    /// ancestor, which is the parent of the last non-first child entered
    /// before reaching the second leaf.
    pub fn lcp_array(&self) -> Vec<usize> {
        let store = self.store();
        let mut lcp = Vec::with_capacity(self.sequence().len());
        // (node, string depth of its parent, is first child)
        let mut stack = vec![(NodeId::ROOT, 0, true)];
        let mut shared = 0;

        while let Some((id, parent_depth, first)) = stack.pop() {
            if !first {
                shared = parent_depth;
            }
            let node = store.node(id);
            match node.kind() {
                NodeKind::Leaf { .. } => lcp.push(shared),
                NodeKind::Inner { children, .. } => {
                    let depth = parent_depth + node.label().len();
                    let last = children.len().saturating_sub(1);
                    for (i, &child) in children.values().rev().enumerate() {
                        stack.push((child, depth, i == last));
                    }
                }
            }
        }

        lcp
    }
}

/// Depth-first leaf enumeration in increasing key order.
pub struct Leaves<'t> {
    store: &'t NodeStore,
    stack: Vec<NodeId>,
}

impl<'t> Leaves<'t> {
    fn empty(store: &'t NodeStore) -> Self {
        Self {
            store,
            stack: Vec::new(),
        }
    }
}

impl Iterator for Leaves<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(id) = self.stack.pop() {
            let node = self.store.node(id);
            match node.kind() {
                NodeKind::Leaf { suffix } => return Some(*suffix),
                NodeKind::Inner { children, .. } => {
                    self.stack.extend(children.values().rev().copied());
                }
            }
        }
        None
    }
}
