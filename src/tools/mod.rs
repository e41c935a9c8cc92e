//! The tools module provides the front end around the codec and registry.
//!
//! The tools are:
//! - cli: Command line options and the verbosity ladder.
//! - repl: The interactive command loop (tokenizing, dispatch, help).
//! - text_io: Source and sink resolution for `read` and `flush`.
pub mod cli;
pub mod repl;
pub mod text_io;
