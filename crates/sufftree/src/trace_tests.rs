use sufftree_core::{Alphabet, Colors, EncodedSeq};

use crate::trace::{BuildStats, PrintTracer};
use crate::{Algorithm, SuffixTree};

fn seq(text: &str) -> EncodedSeq {
    Alphabet::map_string(text).unwrap()
}

fn trace(text: &str, algorithm: Algorithm) -> String {
    let mut tracer = PrintTracer::new(Colors::OFF);
    SuffixTree::build_traced(seq(text), algorithm, &mut tracer);
    tracer.render()
}

fn stats(text: &str, algorithm: Algorithm) -> BuildStats {
    let mut stats = BuildStats::new();
    SuffixTree::build_traced(seq(text), algorithm, &mut stats);
    stats
}

#[test]
fn trace_naive_split() {
    insta::assert_snapshot!(trace("aa", Algorithm::Naive), @r"
    suffix 0
      leaf  #0 -> #1 [0]
    suffix 1
      slow  #1 +1
      split #1 @1 -> #2
      leaf  #2 -> #3 [1]
    suffix 2
      leaf  #0 -> #4 [2]
    ");
}

#[test]
fn trace_mccreight_fast_scan_and_links() {
    insta::assert_snapshot!(trace("abab", Algorithm::McCreight), @r"
    suffix 0
      leaf  #0 -> #1 [0]
      link  #0 ~> #0
    suffix 1
      leaf  #0 -> #2 [1]
    suffix 2
      slow  #1 +2
      split #1 @2 -> #3
      leaf  #3 -> #4 [2]
    suffix 3
      fast  #2 +1
      split #2 @1 -> #5
      leaf  #5 -> #6 [3]
      link  #3 ~> #5
    suffix 4
      link  #5 ~> #0
      leaf  #0 -> #7 [4]
    ");
}

#[test]
fn trace_lcp_climbs() {
    // sa = [2, 1, 0], lcp = [0, 0, 1]
    insta::assert_snapshot!(trace("aa", Algorithm::Lcp), @r"
    suffix 2
      leaf  #0 -> #1 [2]
    suffix 1
      climb #1 +1
      leaf  #0 -> #2 [1]
    suffix 0
      split #2 @1 -> #3
      leaf  #3 -> #4 [0]
    ");
}

#[test]
fn stats_count_events() {
    let stats = stats("abab", Algorithm::McCreight);

    assert_eq!(stats.suffixes, 5);
    assert_eq!(stats.leaves, 5);
    assert_eq!(stats.splits, 2);
    assert_eq!(stats.suffix_links, 3);
    assert_eq!(stats.fast_hops, 1);
    assert_eq!(stats.slow_symbols, 2);
    assert_eq!(stats.climb_hops, 0);
    assert_eq!(stats.scan_work(), 3);
}

#[test]
fn stats_display() {
    insta::assert_snapshot!(stats("abab", Algorithm::McCreight), @r"
    suffixes      5
    leaves        5
    splits        2
    suffix links  3
    fast hops     1
    slow symbols  2
    climb hops    0
    ");
}

#[test]
fn mccreight_scan_work_is_linear() {
    let text = "a".repeat(500);
    let n = text.len() + 1;

    let mccreight = stats(&text, Algorithm::McCreight);
    let naive = stats(&text, Algorithm::Naive);

    assert!(mccreight.scan_work() <= 6 * n, "{}", mccreight.scan_work());
    assert!(naive.scan_work() > 6 * n, "{}", naive.scan_work());
}

#[test]
fn mccreight_scan_work_is_linear_on_periodic_text() {
    let text = "abc".repeat(200);
    let n = text.len() + 1;

    let mccreight = stats(&text, Algorithm::McCreight);

    assert!(mccreight.scan_work() <= 6 * n, "{}", mccreight.scan_work());
}

#[test]
fn lcp_construction_sets_no_links() {
    let stats = stats("mississippi", Algorithm::Lcp);

    assert_eq!(stats.suffix_links, 0);
    assert_eq!(stats.leaves, 12);
    assert_eq!(stats.fast_hops + stats.slow_symbols, 0);
}

#[test]
fn colored_trace() {
    let mut tracer = PrintTracer::new(Colors::ON);
    SuffixTree::build_traced(seq("a"), Algorithm::McCreight, &mut tracer);

    assert_eq!(tracer.lines()[0], "suffix \x1b[32m0\x1b[0m");
    assert_eq!(tracer.lines()[2], "  link  #0 \x1b[2m~> #0\x1b[0m");
    assert_eq!(tracer.stats().suffixes, 2);
}
