use std::fmt::{self, Display, Formatter};

use crate::huffman::{codec, CodeTable};

/// What `inspect` reports for one encoded entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    /// Every symbol occurring in the source text with its code, in
    /// ascending byte order.
    pub alphabet: Vec<(u8, String)>,
    /// Decoded text length in bits, eight per byte.
    pub original_bits: usize,
    /// Stored bit-string length.
    pub encoded_bits: usize,
    /// Integer percentage saved by the encoding.
    pub compression: usize,
}

impl InspectReport {
    pub(crate) fn new(bits: &str, table: &CodeTable) -> Self {
        let alphabet = table
            .entries()
            .map(|(symbol, code)| (symbol, code.to_string()))
            .collect();
        let original_bits = codec::bits_to_text(bits, table).len() * 8;
        let encoded_bits = bits.len();
        // A bit-string that decodes to nothing reports zero compression.
        let compression = if original_bits == 0 {
            0
        } else {
            original_bits.saturating_sub(encoded_bits) * 100 / original_bits
        };
        Self {
            alphabet,
            original_bits,
            encoded_bits,
            compression,
        }
    }
}

impl Display for InspectReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "alphabet:     ")?;
        for (symbol, code) in &self.alphabet {
            write!(f, " [{}] = {}", symbol, code)?;
        }
        writeln!(f)?;
        writeln!(f, "original size: {} bit", self.original_bits)?;
        writeln!(f, "new size:      {} bit", self.encoded_bits)?;
        write!(f, "compression:   {} %", self.compression)
    }
}
