use indoc::indoc;
use sufftree_core::{Alphabet, Colors, EncodedSeq};

use crate::dump::{DumpFormat, TreePrinter};
use crate::{Algorithm, SuffixTree};

fn seq(text: &str) -> EncodedSeq {
    Alphabet::map_string(text).unwrap()
}

#[test]
fn dump_mccreight_with_links() {
    let tree = SuffixTree::build(seq("abab"), Algorithm::McCreight);

    insta::assert_snapshot!(tree.dump(Colors::OFF), @r"
    root
      $ [4]
      ab ~> b
        $ [2]
        ab$ [0]
      b ~> root
        $ [3]
        ab$ [1]
    ");
}

#[test]
fn dump_naive_without_links() {
    let tree = SuffixTree::build(seq("abab"), Algorithm::Naive);

    let expected = indoc! {"
        root
          $ [4]
          ab
            $ [2]
            ab$ [0]
          b
            $ [3]
            ab$ [1]
    "};
    assert_eq!(tree.dump(Colors::OFF), expected);
}

#[test]
fn dump_empty_text() {
    let tree = SuffixTree::new("").unwrap();

    insta::assert_snapshot!(tree.dump(Colors::OFF), @r"
    root
      $ [0]
    ");
}

#[test]
fn dump_colored() {
    let tree = SuffixTree::build(seq("a"), Algorithm::McCreight);

    let out = tree.dump(Colors::ON);

    assert!(out.contains("\x1b[34ma$\x1b[0m \x1b[32m[0]\x1b[0m"));
    assert!(out.contains("\x1b[34m$\x1b[0m \x1b[32m[1]\x1b[0m"));
}

#[test]
fn dot_naive() {
    let tree = SuffixTree::build(seq("ab"), Algorithm::Naive);

    insta::assert_snapshot!(tree.to_dot(), @r#"
    digraph {
      rankdir="LR"
      n0 [label="", shape=circle, style=filled, fillcolor=grey]
      n3 [label="2", shape=circle]
      n0 -> n3 [label="$"]
      n1 [label="0", shape=circle]
      n0 -> n1 [label="ab$"]
      n2 [label="1", shape=circle]
      n0 -> n2 [label="b$"]
    }
    "#);
}

#[test]
fn dot_with_links() {
    let tree = SuffixTree::build(seq("abab"), Algorithm::McCreight);

    let dot = TreePrinter::new(&tree).format(DumpFormat::Dot).dump();

    assert!(dot.contains("  n3 [label=\"\", shape=point]\n"));
    assert!(dot.contains("  n3 -> n5 [style=dashed, color=red]\n"));
    assert!(dot.contains("  n5 -> n0 [style=dashed, color=red]\n"));
    assert!(!dot.contains("n0 -> n0"));
}

#[test]
fn dot_escapes_quotes() {
    let tree = SuffixTree::build(seq("\"\\"), Algorithm::Naive);

    let dot = tree.to_dot();

    assert!(dot.contains(r#"[label="\"\\$"]"#));
    assert!(dot.contains(r#"[label="\\$"]"#));
}
