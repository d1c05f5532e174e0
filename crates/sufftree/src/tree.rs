//! The built, immutable suffix tree.

use sufftree_core::{Alphabet, EncodedSeq, lcp_array, suffix_array};

use crate::build::{self, Algorithm};
use crate::node::{Node, NodeId, NodeKind};
use crate::store::NodeStore;
use crate::trace::{BuildTracer, NoopTracer};
use crate::{Error, Result};

/// Suffix tree over one sentinel-terminated [`EncodedSeq`].
///
/// Built once by one of the constructors, then only queried. The tree owns
/// its sequence, so every edge label stays valid for the tree's lifetime.
#[derive(Clone, Debug)]
pub struct SuffixTree {
    seq: EncodedSeq,
    store: NodeStore,
}

impl SuffixTree {
    /// Map `text` onto its own alphabet and build with the default algorithm.
    pub fn new(text: &str) -> Result<Self> {
        let seq = Alphabet::map_string(text)?;
        Ok(Self::build(seq, Algorithm::default()))
    }

    pub fn naive(seq: EncodedSeq) -> Self {
        Self::build(seq, Algorithm::Naive)
    }

    pub fn mccreight(seq: EncodedSeq) -> Self {
        Self::build(seq, Algorithm::McCreight)
    }

    /// Build from an externally computed suffix array and LCP array.
    ///
    /// Both arrays cover the whole sequence, sentinel included. Their shape
    /// is validated up front. The finished tree is always verified, in
    /// release builds too, and a tree that does not spell the sequence's
    /// suffixes is rejected with [`Error::InconsistentArrays`]. Orders that
    /// break construction itself still panic.
    pub fn from_suffix_array(seq: EncodedSeq, sa: &[usize], lcp: &[usize]) -> Result<Self> {
        validate_arrays(seq.symbols().len(), sa, lcp)?;
        let store = build::lcp(seq.symbols(), sa, lcp, &mut NoopTracer);
        let tree = Self { seq, store };
        tree.verify().map_err(Error::InconsistentArrays)?;
        Ok(tree)
    }

    pub fn build(seq: EncodedSeq, algorithm: Algorithm) -> Self {
        Self::build_traced(seq, algorithm, &mut NoopTracer)
    }

    /// Build while reporting every construction event to `tracer`.
    ///
    /// `Algorithm::Lcp` computes the reference suffix and LCP arrays first.
    pub fn build_traced<T: BuildTracer>(
        seq: EncodedSeq,
        algorithm: Algorithm,
        tracer: &mut T,
    ) -> Self {
        let symbols = seq.symbols();
        let store = match algorithm {
            Algorithm::Naive => build::naive(symbols, tracer),
            Algorithm::McCreight => build::mccreight(symbols, tracer),
            Algorithm::Lcp => {
                let sa = suffix_array(symbols);
                let lcp = lcp_array(symbols, &sa);
                build::lcp(symbols, &sa, &lcp, tracer)
            }
        };
        Self::finish(seq, store)
    }

    fn finish(seq: EncodedSeq, store: NodeStore) -> Self {
        let tree = Self { seq, store };
        tree.debug_verify();
        tree
    }

    /// Assemble a tree without verification.
    #[cfg(test)]
    pub(crate) fn from_parts(seq: EncodedSeq, store: NodeStore) -> Self {
        Self { seq, store }
    }

    #[inline]
    pub fn sequence(&self) -> &EncodedSeq {
        &self.seq
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        self.seq.alphabet()
    }

    #[inline]
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    #[inline]
    pub fn root(&self) -> &Node {
        self.store.node(NodeId::ROOT)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        self.store.node(id)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.store.iter().filter(|(_, n)| n.is_leaf()).count()
    }

    pub fn inner_count(&self) -> usize {
        self.node_count() - self.leaf_count()
    }

    /// Symbols on the edge into `id`.
    #[inline]
    pub fn label_symbols(&self, id: NodeId) -> &[u8] {
        &self.seq.symbols()[self.store.label(id).range()]
    }

    /// Edge label into `id`, decoded.
    pub fn label_text(&self, id: NodeId) -> String {
        self.alphabet().decode(self.label_symbols(id))
    }

    /// Symbols spelled from the root down to `id`.
    pub fn path_label(&self, id: NodeId) -> Vec<u8> {
        let mut parts = Vec::new();
        let mut node = id;
        while let Some(parent) = self.node(node).parent() {
            parts.push(self.label_symbols(node));
            node = parent;
        }
        parts.into_iter().rev().flatten().copied().collect()
    }
}

fn validate_arrays(n: usize, sa: &[usize], lcp: &[usize]) -> Result<()> {
    if sa.len() != n {
        return Err(Error::SuffixArrayLength {
            expected: n,
            actual: sa.len(),
        });
    }
    if lcp.len() != n {
        return Err(Error::LcpArrayLength {
            expected: n,
            actual: lcp.len(),
        });
    }

    let mut seen = vec![false; n];
    for &pos in sa {
        if pos >= n || seen[pos] {
            return Err(Error::NotAPermutation(pos));
        }
        seen[pos] = true;
    }

    for i in 1..n {
        if lcp[i] >= n - sa[i] || lcp[i] >= n - sa[i - 1] {
            return Err(Error::LcpTooLong {
                index: i,
                value: lcp[i],
            });
        }
    }

    Ok(())
}

/// Structural equality: same branching, same label contents, same leaves.
///
/// Node ids and suffix links are ignored, so trees from different
/// constructors compare equal.
impl PartialEq for SuffixTree {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(NodeId::ROOT, NodeId::ROOT)];

        while let Some((a, b)) = stack.pop() {
            if self.label_symbols(a) != other.label_symbols(b) {
                return false;
            }
            match (self.node(a).kind(), other.node(b).kind()) {
                (NodeKind::Leaf { suffix: x }, NodeKind::Leaf { suffix: y }) => {
                    if x != y {
                        return false;
                    }
                }
                (NodeKind::Inner { children: ca, .. }, NodeKind::Inner { children: cb, .. }) => {
                    if ca.len() != cb.len() {
                        return false;
                    }
                    for ((ka, &xa), (kb, &xb)) in ca.iter().zip(cb) {
                        if ka != kb {
                            return false;
                        }
                        stack.push((xa, xb));
                    }
                }
                _ => return false,
            }
        }

        true
    }
}

impl Eq for SuffixTree {}
