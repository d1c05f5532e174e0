//! Invariant checks excluded from coverage reports.
//!
//! Every function here reports a broken precondition of the tree algorithms
//! themselves, never a malformed input. Construction cannot continue with an
//! inconsistent arena, so they all panic.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::node::{NodeId, NodeKind};
use crate::store::NodeStore;

impl NodeStore {
    pub(crate) fn ensure_parent(&self, node: NodeId) -> NodeId {
        self.node(node)
            .parent()
            .unwrap_or_else(|| panic!("NodeStore: {node} has no parent (root reached)"))
    }

    pub(crate) fn ensure_inner(&self, node: NodeId) -> NodeId {
        match self.node(node).kind() {
            NodeKind::Inner { .. } => node,
            NodeKind::Leaf { suffix } => {
                panic!("NodeStore: {node} is leaf {suffix} where an inner node is required")
            }
        }
    }

    pub(crate) fn ensure_suffix_link(&self, node: NodeId) -> NodeId {
        self.node(node).suffix_link().unwrap_or_else(|| {
            panic!("McCreight: {node} has no suffix link (parent links are set before children)")
        })
    }

    pub(crate) fn ensure_child(&self, node: NodeId, symbol: u8) -> NodeId {
        self.node(node).child(symbol).unwrap_or_else(|| {
            panic!(
                "fast scan: {node} has no child for symbol {symbol} \
                 (the scanned path must already exist)"
            )
        })
    }
}

pub(crate) fn arena_overflow(index: usize) -> ! {
    panic!("NodeStore: node index {index} does not fit a NodeId")
}

pub(crate) fn child_collision(parent: NodeId, symbol: u8) -> ! {
    panic!("NodeStore: {parent} already has a child for symbol {symbol}")
}

pub(crate) fn split_out_of_range(node: NodeId, depth: usize, len: usize) -> ! {
    panic!("split_edge: depth {depth} is not strictly inside the {len}-symbol edge to {node}")
}

pub(crate) fn split_root() -> ! {
    panic!("split_edge: the root has no incoming edge to split")
}

pub(crate) fn suffix_fully_matched(suffix: usize) -> ! {
    panic!(
        "insert: suffix {suffix} is already spelled by the tree \
         (sequence is not sentinel-terminated)"
    )
}

pub(crate) fn suffix_link_reassigned(node: NodeId, old: NodeId, new: NodeId) -> ! {
    panic!("NodeStore: suffix link of {node} is {old}, refusing to change it to {new}")
}
