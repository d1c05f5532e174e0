//! Arena node types.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

/// Index of a node in a [`NodeStore`](crate::NodeStore).
///
/// Ids are assigned in creation order; the root is always `NodeId::ROOT`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: Self = Self(0);

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(raw) => Self(raw),
            Err(_) => crate::invariants::arena_overflow(index),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Half-open range of the encoded sequence spelled by an edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Label {
    pub start: usize,
    pub end: usize,
}

impl Label {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "label {start}..{end} is reversed");
        Self { start, end }
    }

    #[inline]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// The label without its first `k` symbols.
    #[inline]
    pub fn skip(self, k: usize) -> Self {
        Self::new(self.start + k, self.end)
    }

    /// The first `k` symbols of the label.
    #[inline]
    pub fn take(self, k: usize) -> Self {
        Self::new(self.start, self.start + k)
    }
}

/// A tree node: shared fields plus the variant payload.
#[derive(Clone, Debug)]
pub struct Node {
    /// Symbols on the edge from the parent. Empty for the root.
    pub(crate) label: Label,
    /// `None` only for the root.
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    Inner {
        /// Children keyed by the first symbol of their label.
        children: BTreeMap<u8, NodeId>,
        /// Inner node spelling this node's path minus its first symbol.
        suffix_link: Option<NodeId>,
    },
    Leaf {
        /// Start of the suffix this leaf spells.
        suffix: usize,
    },
}

impl Node {
    pub(crate) fn inner(label: Label, parent: Option<NodeId>) -> Self {
        Self {
            label,
            parent,
            kind: NodeKind::Inner {
                children: BTreeMap::new(),
                suffix_link: None,
            },
        }
    }

    pub(crate) fn leaf(label: Label, parent: NodeId, suffix: usize) -> Self {
        Self {
            label,
            parent: Some(parent),
            kind: NodeKind::Leaf { suffix },
        }
    }

    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Suffix start for leaves, `None` for inner nodes.
    #[inline]
    pub fn suffix(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Leaf { suffix } => Some(suffix),
            NodeKind::Inner { .. } => None,
        }
    }

    #[inline]
    pub fn suffix_link(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Inner { suffix_link, .. } => suffix_link,
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Children in increasing key order. Empty for leaves.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (u8, NodeId)> + '_ {
        let children = match &self.kind {
            NodeKind::Inner { children, .. } => Some(children),
            NodeKind::Leaf { .. } => None,
        };
        children.into_iter().flatten().map(|(&k, &id)| (k, id))
    }

    #[inline]
    pub fn child(&self, symbol: u8) -> Option<NodeId> {
        match &self.kind {
            NodeKind::Inner { children, .. } => children.get(&symbol).copied(),
            NodeKind::Leaf { .. } => None,
        }
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        match &self.kind {
            NodeKind::Inner { children, .. } => children.len(),
            NodeKind::Leaf { .. } => 0,
        }
    }
}
