//! Structural verification of a finished tree.
//!
//! [`SuffixTree::verify`] walks the whole arena and reports the first broken
//! invariant in time linear in the sequence. Debug builds run it after every
//! construction; release builds skip it, except for trees built from
//! caller-supplied suffix and LCP arrays.

use sufftree_core::lcp_array;

use crate::node::{NodeId, NodeKind};
use crate::tree::SuffixTree;

/// A broken structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("{node} refers to {target}, which is not in the store")]
    Dangling { node: NodeId, target: NodeId },

    #[error("label of {node} reaches past the end of the sequence")]
    LabelOutOfRange { node: NodeId },

    #[error("{node} is reachable more than once")]
    Revisited { node: NodeId },

    #[error("inner node {node} has {children} child(ren), at least 2 are required")]
    UnaryInner { node: NodeId, children: usize },

    #[error("child {child} of {parent} is keyed {key} but its label starts with {first:?}")]
    MisKeyedChild {
        parent: NodeId,
        child: NodeId,
        key: u8,
        first: Option<u8>,
    },

    #[error("{node} records parent {actual:?}, expected {expected:?}")]
    BrokenParent {
        node: NodeId,
        expected: Option<NodeId>,
        actual: Option<NodeId>,
    },

    #[error("leaf {leaf} claims suffix {suffix} but its path spells something else")]
    WrongLeafPath { leaf: NodeId, suffix: usize },

    #[error("label of {node} is not read from any suffix below it")]
    MisplacedLabel { node: NodeId },

    #[error("suffix {before} is ordered before suffix {after} but sorts after it")]
    UnsortedLeaves { before: usize, after: usize },

    #[error("suffix {suffix} branches from its predecessor at depth {actual}, expected {expected}")]
    BranchDepth {
        suffix: usize,
        expected: usize,
        actual: usize,
    },

    #[error("suffix {suffix} has more than one leaf")]
    DuplicateLeaf { suffix: usize },

    #[error("tree has {actual} leaves, the sequence has {expected} suffixes")]
    LeafCount { expected: usize, actual: usize },

    #[error("{node} is not reachable from the root")]
    Detached { node: NodeId },

    #[error("suffix link {node} ~> {target} does not drop exactly the first symbol")]
    WrongSuffixLink { node: NodeId, target: NodeId },
}

impl SuffixTree {
    /// Check every structural invariant, stopping at the first violation.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let depths = self.verify_shape()?;
        self.verify_order()?;
        self.verify_links(&depths)
    }

    /// Panic on a broken invariant. No-op in release builds.
    #[cfg(debug_assertions)]
    pub(crate) fn debug_verify(&self) {
        if let Err(violation) = self.verify() {
            panic!("suffix tree invariant broken: {violation}");
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub(crate) fn debug_verify(&self) {}

    /// Walk down from the root checking shape and edge labels.
    ///
    /// Every label must be read off the sequence at an offset that belongs
    /// to a leaf below it, and a leaf label must run from its own suffix at
    /// the parent's depth to the end. Returns the string depth of every node.
    fn verify_shape(&self) -> Result<Vec<usize>, InvariantViolation> {
        let store = self.store();
        let seq = self.sequence().symbols();
        let n = seq.len();

        let mut depths = vec![0; store.len()];
        let mut visited = vec![false; store.len()];
        // Half-open range of leaf ranks below each node.
        let mut spans = vec![(0, 0); store.len()];
        let mut rank: Vec<Option<usize>> = vec![None; n];
        let mut leaves = 0;

        enum Visit {
            Enter(NodeId, Option<NodeId>),
            Leave(NodeId),
        }
        let mut stack = vec![Visit::Enter(NodeId::ROOT, None)];

        while let Some(visit) = stack.pop() {
            let (id, expected_parent) = match visit {
                Visit::Enter(id, parent) => (id, parent),
                Visit::Leave(id) => {
                    spans[id.index()].1 = leaves;
                    continue;
                }
            };

            if visited[id.index()] {
                return Err(InvariantViolation::Revisited { node: id });
            }
            visited[id.index()] = true;

            let node = store.node(id);
            if node.parent() != expected_parent {
                return Err(InvariantViolation::BrokenParent {
                    node: id,
                    expected: expected_parent,
                    actual: node.parent(),
                });
            }

            let label = node.label();
            if label.end > n || label.start > label.end {
                return Err(InvariantViolation::LabelOutOfRange { node: id });
            }
            let parent_depth = expected_parent.map_or(0, |p| depths[p.index()]);
            depths[id.index()] = parent_depth + label.len();
            spans[id.index()].0 = leaves;

            match node.kind() {
                NodeKind::Leaf { suffix } => {
                    let suffix = *suffix;
                    if suffix >= n || label.end != n || label.start != suffix + parent_depth {
                        return Err(InvariantViolation::WrongLeafPath { leaf: id, suffix });
                    }
                    if rank[suffix].is_some() {
                        return Err(InvariantViolation::DuplicateLeaf { suffix });
                    }
                    rank[suffix] = Some(leaves);
                    leaves += 1;
                    spans[id.index()].1 = leaves;
                }
                NodeKind::Inner { children, .. } => {
                    if id != NodeId::ROOT && children.len() < 2 {
                        return Err(InvariantViolation::UnaryInner {
                            node: id,
                            children: children.len(),
                        });
                    }
                    stack.push(Visit::Leave(id));
                    for (&key, &child) in children.iter().rev() {
                        let Some(child_node) = store.get(child) else {
                            return Err(InvariantViolation::Dangling {
                                node: id,
                                target: child,
                            });
                        };
                        let label = child_node.label();
                        let first = seq.get(label.start).copied().filter(|_| !label.is_empty());
                        if first != Some(key) {
                            return Err(InvariantViolation::MisKeyedChild {
                                parent: id,
                                child,
                                key,
                                first,
                            });
                        }
                        stack.push(Visit::Enter(child, Some(id)));
                    }
                }
            }
        }

        if leaves != n {
            return Err(InvariantViolation::LeafCount {
                expected: n,
                actual: leaves,
            });
        }
        if let Some(index) = visited.iter().position(|&v| !v) {
            return Err(InvariantViolation::Detached {
                node: NodeId::from_index(index),
            });
        }

        for (id, node) in store.iter() {
            if id == NodeId::ROOT || node.is_leaf() {
                continue;
            }
            let label = node.label();
            let (lo, hi) = spans[id.index()];
            let owner = label
                .start
                .checked_sub(depths[id.index()] - label.len())
                .and_then(|suffix| rank.get(suffix).copied().flatten());
            if !owner.is_some_and(|r| (lo..hi).contains(&r)) {
                return Err(InvariantViolation::MisplacedLabel { node: id });
            }
        }

        Ok(depths)
    }

    /// Check that leaves appear in suffix order and branch at the depth the
    /// sequence dictates.
    ///
    /// Runs on a tree whose shape already verified, so the leaves form a
    /// permutation of every suffix.
    fn verify_order(&self) -> Result<(), InvariantViolation> {
        let seq = self.sequence().symbols();
        let sa = self.suffix_array();
        let mut rank = vec![0; sa.len()];
        for (r, &suffix) in sa.iter().enumerate() {
            rank[suffix] = r;
        }

        // Suffix a sorts before suffix b iff its first symbol is smaller, or
        // the first symbols tie and suffix a + 1 sorts before suffix b + 1.
        let key = |suffix: usize| (seq[suffix], rank.get(suffix + 1).copied());
        for pair in sa.windows(2) {
            if key(pair[0]) >= key(pair[1]) {
                return Err(InvariantViolation::UnsortedLeaves {
                    before: pair[0],
                    after: pair[1],
                });
            }
        }

        let expected = lcp_array(seq, &sa);
        let actual = self.lcp_array();
        if let Some(r) = (0..sa.len()).find(|&r| expected[r] != actual[r]) {
            return Err(InvariantViolation::BranchDepth {
                suffix: sa[r],
                expected: expected[r],
                actual: actual[r],
            });
        }

        Ok(())
    }

    /// Check every suffix link against the shape verified above.
    ///
    /// `path(node)` is read off the sequence at any leaf below `node`.
    fn verify_links(&self, depths: &[usize]) -> Result<(), InvariantViolation> {
        let store = self.store();
        let seq = self.sequence().symbols();

        for (id, node) in store.iter() {
            let Some(target) = node.suffix_link() else {
                continue;
            };
            let wrong = InvariantViolation::WrongSuffixLink { node: id, target };

            let Some(target_node) = store.get(target) else {
                return Err(InvariantViolation::Dangling { node: id, target });
            };
            if id == NodeId::ROOT {
                if target != NodeId::ROOT {
                    return Err(wrong);
                }
                continue;
            }
            if target_node.is_leaf() {
                return Err(wrong);
            }

            let depth = depths[id.index()];
            if depths[target.index()] + 1 != depth {
                return Err(wrong);
            }
            let from = self.witness(id);
            let to = self.witness(target);
            if seq[from + 1..from + depth] != seq[to..to + depth - 1] {
                return Err(wrong);
            }
        }

        Ok(())
    }

    /// Suffix of the leftmost leaf below `id`.
    fn witness(&self, id: NodeId) -> usize {
        let mut node = self.node(id);
        loop {
            match node.kind() {
                NodeKind::Leaf { suffix } => return *suffix,
                NodeKind::Inner { children, .. } => match children.values().next() {
                    Some(&child) => node = self.node(child),
                    // Only a childless root, which has no links to check.
                    None => return 0,
                },
            }
        }
    }
}
