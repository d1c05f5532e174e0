//! Human-readable tree dumps: indented text and Graphviz `dot`.
//!
//! Text form, two spaces of indent per level:
//!
//! ```text
//! root
//!   $ [4]
//!   ab ~> b
//!     $ [2]
//!     ab$ [0]
//! ```
//!
//! Leaves show their suffix in brackets; inner nodes show the path their
//! suffix link points to. The root's link to itself is left out.

use std::fmt;

use sufftree_core::Colors;

use crate::node::{NodeId, NodeKind};
use crate::tree::SuffixTree;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Text,
    Dot,
}

/// Printer for a [`SuffixTree`] with configurable output.
pub struct TreePrinter<'t> {
    tree: &'t SuffixTree,
    colors: Colors,
    format: DumpFormat,
}

impl<'t> TreePrinter<'t> {
    pub fn new(tree: &'t SuffixTree) -> Self {
        Self {
            tree,
            colors: Colors::OFF,
            format: DumpFormat::Text,
        }
    }

    /// Colors apply to the text format only.
    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn format(mut self, format: DumpFormat) -> Self {
        self.format = format;
        self
    }

    pub fn dump(&self) -> String {
        self.to_string()
    }

    /// Nodes in preorder with their depth, children in key order.
    fn preorder(&self) -> Vec<(NodeId, usize)> {
        let mut order = Vec::with_capacity(self.tree.node_count());
        let mut stack = vec![(NodeId::ROOT, 0)];
        while let Some((id, depth)) = stack.pop() {
            order.push((id, depth));
            let children = self.tree.node(id).children().rev();
            stack.extend(children.map(|(_, child)| (child, depth + 1)));
        }
        order
    }

    fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        writeln!(f, "root")?;

        for (id, depth) in self.preorder().into_iter().skip(1) {
            let node = self.tree.node(id);
            let indent = "  ".repeat(depth);
            let label = c.paint_label(&self.tree.label_text(id));
            write!(f, "{indent}{label}")?;

            match node.kind() {
                NodeKind::Leaf { suffix } => {
                    write!(f, " {}", c.paint_leaf(&format!("[{suffix}]")))?;
                }
                NodeKind::Inner {
                    suffix_link: Some(target),
                    ..
                } => {
                    let path = self.path_name(*target);
                    write!(f, " {}", c.paint_link(&format!("~> {path}")))?;
                }
                NodeKind::Inner { .. } => {}
            }
            writeln!(f)?;
        }

        Ok(())
    }

    fn path_name(&self, id: NodeId) -> String {
        if id == NodeId::ROOT {
            return "root".to_owned();
        }
        self.tree.alphabet().decode(&self.tree.path_label(id))
    }

    fn fmt_dot(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, "  rankdir=\"LR\"")?;

        for (id, _) in self.preorder() {
            let node = self.tree.node(id);
            let n = id.index();
            match node.kind() {
                _ if id == NodeId::ROOT => writeln!(
                    f,
                    "  n{n} [label=\"\", shape=circle, style=filled, fillcolor=grey]"
                )?,
                NodeKind::Leaf { suffix } => {
                    writeln!(f, "  n{n} [label=\"{suffix}\", shape=circle]")?
                }
                NodeKind::Inner { .. } => writeln!(f, "  n{n} [label=\"\", shape=point]")?,
            }
            if let Some(parent) = node.parent() {
                let label = escape_dot(&self.tree.label_text(id));
                writeln!(f, "  n{} -> n{n} [label=\"{label}\"]", parent.index())?;
            }
        }

        for (id, node) in self.tree.store().iter() {
            match node.suffix_link() {
                Some(target) if id != NodeId::ROOT => writeln!(
                    f,
                    "  n{} -> n{} [style=dashed, color=red]",
                    id.index(),
                    target.index()
                )?,
                _ => {}
            }
        }

        writeln!(f, "}}")
    }
}

impl fmt::Display for TreePrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            DumpFormat::Text => self.fmt_text(f),
            DumpFormat::Dot => self.fmt_dot(f),
        }
    }
}

fn escape_dot(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}

impl SuffixTree {
    /// Indented text dump.
    pub fn dump(&self, colors: Colors) -> String {
        TreePrinter::new(self).colors(colors).dump()
    }

    /// Graphviz rendering, suffix links dashed.
    pub fn to_dot(&self) -> String {
        TreePrinter::new(self).format(DumpFormat::Dot).dump()
    }
}
