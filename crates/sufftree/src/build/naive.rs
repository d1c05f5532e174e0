use crate::node::{Label, NodeId};
use crate::store::NodeStore;
use crate::trace::BuildTracer;

use super::insert_at;

/// Insert every suffix by a full slow scan from the root.
pub(crate) fn naive<T: BuildTracer>(seq: &[u8], tracer: &mut T) -> NodeStore {
    let mut store = NodeStore::new();

    for i in 0..seq.len() {
        tracer.trace_suffix(i);
        let pattern = Label::new(i, seq.len());
        let landing = store.search(seq, NodeId::ROOT, &seq[pattern.range()], tracer);
        insert_at(&mut store, seq, i, pattern, landing, tracer);
    }

    store
}
