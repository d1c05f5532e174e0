use crate::node::{Label, NodeId};
use crate::store::NodeStore;
use crate::trace::BuildTracer;
use crate::walk::Landing;

use super::insert_at;

/// McCreight's linear-time construction.
///
/// Suffix `i` is split as `y + z + w` relative to the previous leaf `v` with
/// parent `p`: `y` is the path to `p`'s parent, `z` the label of `p`, `w` the
/// label of `v`. Following suffix links skips `y` for free, a fast scan
/// crosses `z`, and only `w` is compared symbol by symbol.
pub(crate) fn mccreight<T: BuildTracer>(seq: &[u8], tracer: &mut T) -> NodeStore {
    let mut store = NodeStore::new();
    let root = NodeId::ROOT;

    tracer.trace_suffix(0);
    let mut v = store.attach_leaf(seq, root, 0, Label::new(0, seq.len()), tracer);
    store.set_suffix_link(root, root, tracer);

    for i in 1..seq.len() {
        tracer.trace_suffix(i);
        v = insert_suffix(&mut store, seq, i, v, tracer);
    }

    store
}

/// Where the slow scan for suffix `i` starts, unless the fast scan already
/// placed its leaf.
enum Located {
    Inserted(NodeId),
    Scan { from: NodeId, w: Label },
}

fn insert_suffix<T: BuildTracer>(
    store: &mut NodeStore,
    seq: &[u8],
    i: usize,
    v: NodeId,
    tracer: &mut T,
) -> NodeId {
    let (from, w) = match locate(store, seq, i, v, tracer) {
        Located::Inserted(leaf) => return leaf,
        Located::Scan { from, w } => (from, w),
    };

    let landing = store.search(seq, from, &seq[w.range()], tracer);
    insert_at(store, seq, i, w, landing, tracer)
}

fn locate<T: BuildTracer>(
    store: &mut NodeStore,
    seq: &[u8],
    i: usize,
    v: NodeId,
    tracer: &mut T,
) -> Located {
    let p = store.ensure_parent(v);

    // The link jumps past y + z; only w is left.
    if let Some(link) = store.node(p).suffix_link() {
        let w = if p == NodeId::ROOT {
            Label::new(i, seq.len())
        } else {
            store.label(v)
        };
        return Located::Scan { from: link, w };
    }

    // The root always has a link, so p has a parent whose link is known.
    let pp = store.ensure_parent(p);
    let from = store.ensure_suffix_link(pp);
    let z = if pp == NodeId::ROOT {
        store.label(p).skip(1)
    } else {
        store.label(p)
    };
    let w = store.label(v);

    match store.fast_scan(from, &seq[z.range()], tracer) {
        // z ends inside an edge: the new leaf branches off right there.
        Landing::Edge { child, matched, .. } if matched < store.label(child).len() => {
            let leaf = store.split_edge(seq, child, matched, i, w, tracer);
            let inner = store.ensure_parent(leaf);
            store.set_suffix_link(p, inner, tracer);
            Located::Inserted(leaf)
        }
        Landing::Edge { child: target, .. } | Landing::Node { node: target, .. } => {
            let target = store.ensure_inner(target);
            store.set_suffix_link(p, target, tracer);
            Located::Scan { from: target, w }
        }
    }
}
