//! Instrumentation for tree construction.
//!
//! Constructors are generic over [`BuildTracer`]. With [`NoopTracer`] every
//! hook is an empty `#[inline(always)]` function and compiles away, so the
//! untraced constructors pay nothing. [`BuildStats`] counts work (used to
//! check that McCreight stays linear) and [`PrintTracer`] records a
//! human-readable event log for the CLI `trace` command.
//!
//! Hooks receive raw ids and lengths only. Formatting happens in the tracer.

use std::fmt;

use sufftree_core::Colors;

use crate::node::NodeId;

/// How a walk moved along an edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scan {
    /// Symbol-comparing descent.
    Slow,
    /// Length-only descent along a path known to exist.
    Fast,
    /// Upward walk of the LCP constructor.
    Climb,
}

impl Scan {
    fn name(self) -> &'static str {
        match self {
            Scan::Slow => "slow",
            Scan::Fast => "fast",
            Scan::Climb => "climb",
        }
    }
}

/// Hooks called by constructors and the tree walker.
///
/// Call order for one suffix:
/// - `trace_suffix` before anything else
/// - `trace_scan` once per edge a walk moves along
/// - `trace_suffix_link` when McCreight discovers a link
/// - `trace_split` then `trace_leaf` when an edge is broken
/// - `trace_leaf` alone when a leaf is hung below an existing node
pub trait BuildTracer {
    /// Called before the suffix starting at `suffix` is inserted.
    fn trace_suffix(&mut self, suffix: usize);

    /// Called for each edge visited. `symbols` is how far along the edge the
    /// walk got (for `Scan::Climb`, how many symbols were climbed).
    fn trace_scan(&mut self, scan: Scan, node: NodeId, symbols: usize);

    /// Called after `leaf` is attached below `parent`.
    fn trace_leaf(&mut self, parent: NodeId, leaf: NodeId, suffix: usize);

    /// Called after the edge into `node` is split `depth` symbols down by `inner`.
    fn trace_split(&mut self, node: NodeId, inner: NodeId, depth: usize);

    /// Called when the suffix link of `node` is set to `target`.
    fn trace_suffix_link(&mut self, node: NodeId, target: NodeId);
}

/// Tracer that gets optimized away completely.
pub struct NoopTracer;

impl BuildTracer for NoopTracer {
    #[inline(always)]
    fn trace_suffix(&mut self, _suffix: usize) {}

    #[inline(always)]
    fn trace_scan(&mut self, _scan: Scan, _node: NodeId, _symbols: usize) {}

    #[inline(always)]
    fn trace_leaf(&mut self, _parent: NodeId, _leaf: NodeId, _suffix: usize) {}

    #[inline(always)]
    fn trace_split(&mut self, _node: NodeId, _inner: NodeId, _depth: usize) {}

    #[inline(always)]
    fn trace_suffix_link(&mut self, _node: NodeId, _target: NodeId) {}
}

/// Work counters for one construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub suffixes: usize,
    /// Edges crossed by fast scans.
    pub fast_hops: usize,
    /// Symbols matched by slow scans.
    pub slow_symbols: usize,
    /// Edges climbed by the LCP constructor.
    pub climb_hops: usize,
    pub leaves: usize,
    pub splits: usize,
    pub suffix_links: usize,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total walking work: the quantity McCreight keeps linear.
    pub fn scan_work(&self) -> usize {
        self.fast_hops + self.slow_symbols + self.climb_hops
    }
}

impl BuildTracer for BuildStats {
    fn trace_suffix(&mut self, _suffix: usize) {
        self.suffixes += 1;
    }

    fn trace_scan(&mut self, scan: Scan, _node: NodeId, symbols: usize) {
        match scan {
            Scan::Slow => self.slow_symbols += symbols,
            Scan::Fast => self.fast_hops += 1,
            Scan::Climb => self.climb_hops += 1,
        }
    }

    fn trace_leaf(&mut self, _parent: NodeId, _leaf: NodeId, _suffix: usize) {
        self.leaves += 1;
    }

    fn trace_split(&mut self, _node: NodeId, _inner: NodeId, _depth: usize) {
        self.splits += 1;
    }

    fn trace_suffix_link(&mut self, _node: NodeId, _target: NodeId) {
        self.suffix_links += 1;
    }
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "suffixes      {}", self.suffixes)?;
        writeln!(f, "leaves        {}", self.leaves)?;
        writeln!(f, "splits        {}", self.splits)?;
        writeln!(f, "suffix links  {}", self.suffix_links)?;
        writeln!(f, "fast hops     {}", self.fast_hops)?;
        writeln!(f, "slow symbols  {}", self.slow_symbols)?;
        write!(f, "climb hops    {}", self.climb_hops)
    }
}

/// Tracer that records one line per event.
///
/// Also keeps a [`BuildStats`] so callers can print a summary afterwards.
pub struct PrintTracer {
    lines: Vec<String>,
    stats: BuildStats,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(colors: Colors) -> Self {
        Self {
            lines: Vec::new(),
            stats: BuildStats::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// All lines joined, each terminated by a newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Print collected lines to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    fn event(&mut self, name: &str, body: String) {
        self.lines.push(format!("  {name:<5} {body}"));
    }
}

impl BuildTracer for PrintTracer {
    fn trace_suffix(&mut self, suffix: usize) {
        self.stats.trace_suffix(suffix);
        let n = self.colors.paint_leaf(&suffix.to_string());
        self.lines.push(format!("suffix {n}"));
    }

    fn trace_scan(&mut self, scan: Scan, node: NodeId, symbols: usize) {
        self.stats.trace_scan(scan, node, symbols);
        self.event(scan.name(), format!("{node} +{symbols}"));
    }

    fn trace_leaf(&mut self, parent: NodeId, leaf: NodeId, suffix: usize) {
        self.stats.trace_leaf(parent, leaf, suffix);
        let n = self.colors.paint_leaf(&format!("[{suffix}]"));
        self.event("leaf", format!("{parent} -> {leaf} {n}"));
    }

    fn trace_split(&mut self, node: NodeId, inner: NodeId, depth: usize) {
        self.stats.trace_split(node, inner, depth);
        self.event("split", format!("{node} @{depth} -> {inner}"));
    }

    fn trace_suffix_link(&mut self, node: NodeId, target: NodeId) {
        self.stats.trace_suffix_link(node, target);
        let arrow = self.colors.paint_link(&format!("~> {target}"));
        self.event("link", format!("{node} {arrow}"));
    }
}
