use sufftree_core::{Alphabet, EncodedSeq};

use crate::node::{Label, NodeId, NodeKind};
use crate::store::NodeStore;
use crate::trace::NoopTracer;
use crate::{Algorithm, SuffixTree};

fn seq(text: &str) -> EncodedSeq {
    Alphabet::map_string(text).unwrap()
}

fn id(index: usize) -> NodeId {
    NodeId::from_index(index)
}

#[test]
fn new_store_holds_only_root() {
    let store = NodeStore::new();

    assert_eq!(store.len(), 1);
    assert!(!store.is_empty());
    assert!(store.label(NodeId::ROOT).is_empty());
    assert_eq!(store.node(NodeId::ROOT).parent(), None);
    assert_eq!(store.node(NodeId::ROOT).child_count(), 0);
}

#[test]
fn attach_leaf_keys_by_first_symbol() {
    let s = seq("ab");
    let symbols = s.symbols();
    let mut store = NodeStore::new();

    let leaf = store.attach_leaf(symbols, NodeId::ROOT, 1, Label::new(1, 3), &mut NoopTracer);

    assert_eq!(store.node(NodeId::ROOT).child(symbols[1]), Some(leaf));
    assert_eq!(store.node(leaf).parent(), Some(NodeId::ROOT));
    assert_eq!(store.node(leaf).suffix(), Some(1));
}

#[test]
fn split_edge_inserts_inner_node() {
    // a a b $
    let s = seq("aab");
    let symbols = s.symbols();
    let mut store = NodeStore::new();
    let first = store.attach_leaf(symbols, NodeId::ROOT, 0, Label::new(0, 4), &mut NoopTracer);

    let leaf = store.split_edge(symbols, first, 1, 1, Label::new(2, 4), &mut NoopTracer);

    let inner = store.node(leaf).parent().unwrap();
    assert_eq!(store.node(NodeId::ROOT).child(symbols[0]), Some(inner));
    assert_eq!(store.node(inner).parent(), Some(NodeId::ROOT));
    assert_eq!(store.label(inner), Label::new(0, 1));
    assert_eq!(store.label(first), Label::new(1, 4));
    assert_eq!(store.node(first).parent(), Some(inner));
    assert_eq!(store.label(leaf), Label::new(2, 4));

    let children: Vec<_> = store.node(inner).children().collect();
    assert_eq!(children, vec![(symbols[1], first), (symbols[2], leaf)]);
}

#[test]
#[should_panic(expected = "not strictly inside")]
fn split_at_zero_depth_panics() {
    let s = seq("ab");
    let mut store = NodeStore::new();
    let leaf = store.attach_leaf(s.symbols(), NodeId::ROOT, 0, Label::new(0, 3), &mut NoopTracer);

    store.split_edge(s.symbols(), leaf, 0, 1, Label::new(1, 3), &mut NoopTracer);
}

#[test]
#[should_panic(expected = "not strictly inside")]
fn split_at_label_end_panics() {
    let s = seq("ab");
    let mut store = NodeStore::new();
    let leaf = store.attach_leaf(s.symbols(), NodeId::ROOT, 0, Label::new(0, 3), &mut NoopTracer);

    store.split_edge(s.symbols(), leaf, 3, 1, Label::new(1, 3), &mut NoopTracer);
}

#[test]
#[should_panic(expected = "root has no incoming edge")]
fn split_root_panics() {
    let s = seq("ab");
    let mut store = NodeStore::new();

    store.split_edge(s.symbols(), NodeId::ROOT, 1, 0, Label::new(0, 3), &mut NoopTracer);
}

#[test]
#[should_panic(expected = "already has a child")]
fn attach_duplicate_key_panics() {
    let s = seq("aa");
    let symbols = s.symbols();
    let mut store = NodeStore::new();

    store.attach_leaf(symbols, NodeId::ROOT, 0, Label::new(0, 3), &mut NoopTracer);
    store.attach_leaf(symbols, NodeId::ROOT, 1, Label::new(1, 3), &mut NoopTracer);
}

#[test]
#[should_panic(expected = "where an inner node is required")]
fn attach_below_leaf_panics() {
    let s = seq("ab");
    let symbols = s.symbols();
    let mut store = NodeStore::new();
    let leaf = store.attach_leaf(symbols, NodeId::ROOT, 0, Label::new(0, 3), &mut NoopTracer);

    store.attach_leaf(symbols, leaf, 1, Label::new(1, 3), &mut NoopTracer);
}

#[test]
fn suffix_link_is_write_once() {
    let mut store = NodeStore::new();

    store.set_suffix_link(NodeId::ROOT, NodeId::ROOT, &mut NoopTracer);
    store.set_suffix_link(NodeId::ROOT, NodeId::ROOT, &mut NoopTracer);

    assert_eq!(store.node(NodeId::ROOT).suffix_link(), Some(NodeId::ROOT));
}

#[test]
#[should_panic(expected = "refusing to change it")]
fn suffix_link_reassignment_panics() {
    let tree = SuffixTree::build(seq("abab"), Algorithm::McCreight);
    let mut store = tree.store().clone();

    // #3 spells "ab" and already links to #5 ("b").
    store.set_suffix_link(id(3), NodeId::ROOT, &mut NoopTracer);
}

#[test]
fn climb_stops_on_node_or_inside_edge() {
    // #3 "ab" -> #1 "ab$" (leaf 0)
    let tree = SuffixTree::build(seq("abab"), Algorithm::Naive);
    let store = tree.store();
    assert_eq!(store.node(id(1)).suffix(), Some(0));
    assert_eq!(store.node(id(1)).parent(), Some(id(3)));

    assert_eq!(store.climb(id(1), 1, &mut NoopTracer), (id(1), 2));
    assert_eq!(store.climb(id(1), 3, &mut NoopTracer), (id(3), 0));
    assert_eq!(store.climb(id(1), 4, &mut NoopTracer), (id(3), 1));
    assert_eq!(store.climb(id(1), 5, &mut NoopTracer), (NodeId::ROOT, 0));
}

#[test]
fn iter_yields_every_node_in_creation_order() {
    let tree = SuffixTree::build(seq("abab"), Algorithm::Naive);

    let ids: Vec<_> = tree.store().iter().map(|(id, _)| id.index()).collect();
    assert_eq!(ids, (0..8).collect::<Vec<_>>());

    let leaves = tree
        .store()
        .iter()
        .filter(|(_, n)| matches!(n.kind(), NodeKind::Leaf { .. }))
        .count();
    assert_eq!(leaves, 5);
}
