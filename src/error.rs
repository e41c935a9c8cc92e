//! State errors raised by registry operations.
//!
//! Every variant is non-fatal: when an operation returns one of these the
//! registry has not been touched, and the command loop reports the message
//! and keeps going.

use thiserror::Error;

/// Failure modes of the registry's operation algebra.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The named text has never been read into the registry.
    #[error("\"{0}\" is not read")]
    NotFound(String),

    /// `read` and `concat` refuse to clobber an unrelated existing name.
    #[error("\"{0}\" has already been read")]
    AlreadyExists(String),

    /// `encode` refuses a source that already carries a code table.
    #[error("\"{0}\" is already encoded")]
    AlreadyEncoded(String),

    /// The operation needs a code table for the named text.
    #[error("\"{0}\" is not encoded")]
    NotEncoded(String),

    /// `encode` has nothing to build a tree from.
    #[error("\"{0}\" holds empty text")]
    EmptyText(String),

    /// `merge` sources must both be plain or both be encoded.
    #[error("\"{a}\" and \"{b}\" have different encodings")]
    MixedEncoding { a: String, b: String },

    /// `merge` sources must hold byte-identical values.
    #[error("\"{a}\" and \"{b}\" hold different text")]
    TextMismatch { a: String, b: String },

    /// `list` on a registry with nothing in it.
    #[error("no texts have been read")]
    Empty,
}

/// Type alias for Result with the registry error type
pub type Result<T> = std::result::Result<T, RegistryError>;
