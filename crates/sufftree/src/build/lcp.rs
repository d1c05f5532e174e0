use crate::node::{Label, NodeId};
use crate::store::NodeStore;
use crate::trace::BuildTracer;

/// Insert suffixes in suffix-array order, climbing up from the previous leaf
/// to the depth it shares with the next suffix.
///
/// `sa` and `lcp` must already be validated: same length as `seq`, `sa` a
/// permutation, and every `lcp[i]` shorter than both suffixes it compares.
pub(crate) fn lcp<T: BuildTracer>(
    seq: &[u8],
    sa: &[usize],
    lcp: &[usize],
    tracer: &mut T,
) -> NodeStore {
    let n = seq.len();
    let mut store = NodeStore::new();

    tracer.trace_suffix(sa[0]);
    let mut v = store.attach_leaf(seq, NodeId::ROOT, sa[0], Label::new(sa[0], n), tracer);

    for i in 1..sa.len() {
        tracer.trace_suffix(sa[i]);

        // The previous leaf spells n - sa[i-1] symbols; keep only the shared lcp[i].
        let (node, depth) = store.climb(v, n - sa[i - 1] - lcp[i], tracer);
        let tail = Label::new(sa[i] + lcp[i], n);

        v = if depth == 0 {
            let node = store.ensure_inner(node);
            store.attach_leaf(seq, node, sa[i], tail, tracer)
        } else {
            store.split_edge(seq, node, depth, sa[i], tail, tracer)
        };
    }

    store
}
