pub mod disassembler;
pub mod pattern;
pub mod scanner;

pub use disassembler::Disassembler;
pub use pattern::MethodPattern;
pub use scanner::scan_extracted_tree;
