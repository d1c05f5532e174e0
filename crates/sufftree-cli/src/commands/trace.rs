//! Trace tree construction for debugging.

use sufftree::{Algorithm, Colors, PrintTracer};

use super::input::TextInput;

pub struct TraceArgs {
    pub input: TextInput,
    pub algorithm: Algorithm,
    pub stats: bool,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(colors);
    let tree = args.input.build_traced(args.algorithm, &mut tracer);
    tracer.print();

    if !args.stats {
        return;
    }

    println!("{}---{}", colors.link, colors.reset);
    println!("{}", tracer.stats());
    println!("nodes         {}", tree.node_count());
}
