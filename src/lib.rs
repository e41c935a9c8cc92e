//! Interactive Huffman text compressor.
//!
//! Provides a classic Huffman codec over the 256 byte values (frequency
//! counting, tree construction, code table generation, `'0'`/`'1'` character
//! bit-strings) together with an in-memory registry of named texts that can
//! be read, encoded, decoded, compared, merged and inspected.
//!
//! The interactive front end lives in [`tools::repl`]; the binary wires it to
//! stdin/stdout. The registry is plain single-threaded mutable state and does
//! not synchronize itself - wrap it externally before sharing it across
//! threads.

pub mod error;
pub mod huffman;
pub mod registry;
pub mod tools;

// Re-export commonly used types
pub use error::{RegistryError, Result};
pub use registry::Registry;
