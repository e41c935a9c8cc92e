//! Classic Huffman codec.
//!
//! Data flows leaf-first: [`freq_count::freqs`] counts byte occurrences,
//! [`tree::build_tree`] folds them into a single binary tree through a
//! min-priority queue, [`CodeTable::from_tree`] walks the tree into
//! per-symbol bit-strings, and [`codec`] maps texts to bit-strings and back.
//!
//! Bit-strings here are literal strings of `'0'` and `'1'` characters, one
//! character per bit. That is the format the registry stores and the decoder
//! consumes - it is never packed into bytes.

pub mod code_table;
pub mod codec;
pub mod freq_count;
pub mod tree;

pub use code_table::CodeTable;
pub use tree::Node;
