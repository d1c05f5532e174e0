//! Node arena and the mutations constructors are built from.
//!
//! All nodes live in one `Vec`, addressed by [`NodeId`]. Children are owned
//! through their parent's child map; parent and suffix-link fields are plain
//! ids. Nothing here looks at the tree globally: constructors combine
//! [`NodeStore::attach_leaf`], [`NodeStore::split_edge`] and the walker in
//! `walk.rs`.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::invariants;
use crate::node::{Label, Node, NodeId, NodeKind};
use crate::trace::{BuildTracer, Scan};

/// Arena of tree nodes. Slot 0 is the root.
#[derive(Clone, Debug)]
pub struct NodeStore {
    nodes: Vec<Node>,
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStore {
    /// Store holding only a childless root with an empty label.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::inner(Label::default(), None)],
        }
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from the start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve an id.
    ///
    /// # Panics
    /// Panics if the id was not created by this store.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn label(&self, id: NodeId) -> Label {
        self.node(id).label
    }

    /// All nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::from_index(i), n))
    }

    #[cfg(test)]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn children_mut(&mut self, id: NodeId) -> &mut BTreeMap<u8, NodeId> {
        let id = self.ensure_inner(id);
        match &mut self.nodes[id.index()].kind {
            NodeKind::Inner { children, .. } => children,
            NodeKind::Leaf { .. } => unreachable!("checked by ensure_inner"),
        }
    }

    /// Hang `child` below `parent`, keyed by the first symbol of its label.
    fn attach(&mut self, seq: &[u8], parent: NodeId, child: NodeId) {
        let label = self.label(child);
        debug_assert!(!label.is_empty(), "{child} has an empty label");
        let key = seq[label.start];

        match self.children_mut(parent).entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(child);
            }
            Entry::Occupied(_) => invariants::child_collision(parent, key),
        }
        self.nodes[child.index()].parent = Some(parent);
    }

    /// Create a leaf for `suffix` below the inner node `parent`.
    pub(crate) fn attach_leaf<T: BuildTracer>(
        &mut self,
        seq: &[u8],
        parent: NodeId,
        suffix: usize,
        tail: Label,
        tracer: &mut T,
    ) -> NodeId {
        let leaf = self.push(Node::leaf(tail, parent, suffix));
        self.attach(seq, parent, leaf);
        tracer.trace_leaf(parent, leaf, suffix);
        leaf
    }

    /// Break the edge into `node` after `depth` symbols and hang a new leaf
    /// for `suffix` (edge label `tail`) off the break point.
    ///
    /// The new inner node takes `node`'s place in its parent, under the same
    /// key, and gets exactly two children: the shortened `node` and the leaf.
    /// Returns the leaf.
    pub(crate) fn split_edge<T: BuildTracer>(
        &mut self,
        seq: &[u8],
        node: NodeId,
        depth: usize,
        suffix: usize,
        tail: Label,
        tracer: &mut T,
    ) -> NodeId {
        let parent = match self.node(node).parent {
            Some(parent) => parent,
            None => invariants::split_root(),
        };
        let label = self.label(node);
        if depth == 0 || depth >= label.len() {
            invariants::split_out_of_range(node, depth, label.len());
        }

        let inner = self.push(Node::inner(label.take(depth), Some(parent)));

        // Detach: same first symbol, so the parent's slot is simply redirected.
        self.children_mut(parent).insert(seq[label.start], inner);
        // Reattach below the break point.
        self.nodes[node.index()].label = label.skip(depth);
        self.attach(seq, inner, node);
        tracer.trace_split(node, inner, depth);

        self.attach_leaf(seq, inner, suffix, tail, tracer)
    }

    /// Set the suffix link of inner node `node`. A link never changes once set.
    pub(crate) fn set_suffix_link<T: BuildTracer>(
        &mut self,
        node: NodeId,
        target: NodeId,
        tracer: &mut T,
    ) {
        let node = self.ensure_inner(node);
        if let NodeKind::Inner { suffix_link, .. } = &mut self.nodes[node.index()].kind {
            match *suffix_link {
                None => *suffix_link = Some(target),
                Some(old) if old == target => return,
                Some(old) => invariants::suffix_link_reassigned(node, old, target),
            }
        }
        tracer.trace_suffix_link(node, target);
    }

    /// Climb `distance` symbols up from `from`.
    ///
    /// Whole edges are subtracted while they fit. Returns the node reached
    /// and how far down its incoming edge the climb stopped. A depth of `0`
    /// means the climb ended exactly on that node.
    pub(crate) fn climb<T: BuildTracer>(
        &self,
        from: NodeId,
        distance: usize,
        tracer: &mut T,
    ) -> (NodeId, usize) {
        let mut node = from;
        let mut left = distance;

        while left > 0 && self.label(node).len() <= left {
            let len = self.label(node).len();
            tracer.trace_scan(Scan::Climb, node, len);
            left -= len;
            node = self.ensure_parent(node);
        }

        let depth = if left == 0 {
            0
        } else {
            self.label(node).len() - left
        };
        (node, depth)
    }
}
