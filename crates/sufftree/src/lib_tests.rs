use quickcheck::{QuickCheck, quickcheck};
use sufftree_core::{Alphabet, EncodedSeq};

use crate::{Algorithm, Error, SuffixTree};

/// Short text over a few letters, so repeats are common.
fn text_of(bytes: &[u8], letters: u8) -> String {
    bytes
        .iter()
        .take(48)
        .map(|b| char::from(b'a' + b % letters))
        .collect()
}

fn seq(text: &str) -> EncodedSeq {
    Alphabet::map_string(text).unwrap()
}

fn occurrences(text: &str, pattern: &str) -> Vec<usize> {
    if pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| text[i..].starts_with(pattern))
        .collect()
}

#[test]
fn tree_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SuffixTree>();
    assert_send_sync::<Error>();
}

#[test]
fn shared_across_threads() {
    let tree = SuffixTree::new("mississippi").unwrap();
    let tree = &tree;

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["iss", "ssi", "p"]
            .into_iter()
            .map(|pattern| scope.spawn(move || tree.search_sorted(pattern)))
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results, vec![vec![1, 4], vec![2, 5], vec![8, 9]]);
    });
}

#[test]
fn prop_constructors_agree() {
    fn prop(bytes: Vec<u8>, letters: u8) -> bool {
        let text = text_of(&bytes, letters % 4 + 1);
        let naive = SuffixTree::naive(seq(&text));
        let mccreight = SuffixTree::mccreight(seq(&text));
        let lcp = SuffixTree::build(seq(&text), Algorithm::Lcp);
        naive == mccreight && naive == lcp
    }
    quickcheck(prop as fn(Vec<u8>, u8) -> bool);
}

#[test]
fn prop_search_matches_scan() {
    fn prop(bytes: Vec<u8>, pattern: Vec<u8>) -> bool {
        let text = text_of(&bytes, 3);
        let pattern = text_of(&pattern[..pattern.len().min(4)], 3);
        let expected = occurrences(&text, &pattern);

        Algorithm::ALL.into_iter().all(|algorithm| {
            let tree = SuffixTree::build(seq(&text), algorithm);
            tree.search_sorted(&pattern) == expected
                && tree.contains(&pattern) == text.contains(pattern.as_str())
        })
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
}

#[test]
fn prop_every_substring_is_found() {
    fn prop(bytes: Vec<u8>) -> bool {
        let text = text_of(&bytes, 2);
        let tree = SuffixTree::new(&text).unwrap();
        (0..text.len()).all(|i| {
            (i + 1..=text.len()).all(|j| tree.search(&text[i..j]).contains(&i))
        })
    }
    quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[test]
fn prop_leaves_cover_every_suffix() {
    fn prop(bytes: Vec<u8>) -> bool {
        let text = text_of(&bytes, 3);
        let tree = SuffixTree::mccreight(seq(&text));
        let mut leaves = tree.suffix_array();
        leaves.sort_unstable();
        leaves == (0..=text.len()).collect::<Vec<_>>()
            && tree.store().iter().all(|(id, node)| {
                id == crate::NodeId::ROOT || node.is_leaf() || node.child_count() >= 2
            })
    }
    quickcheck(prop as fn(Vec<u8>) -> bool);
}
