//! Print the tree as indented text or Graphviz.

use sufftree::{Algorithm, Colors, DumpFormat, TreePrinter};

use super::input::TextInput;

pub struct DumpArgs {
    pub input: TextInput,
    pub algorithm: Algorithm,
    pub format: DumpFormat,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let tree = args.input.build(args.algorithm);
    let printer = TreePrinter::new(&tree)
        .format(args.format)
        .colors(Colors::new(args.color));
    print!("{}", printer.dump());
}
