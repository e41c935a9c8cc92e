use log::trace;
use rustc_hash::FxHashMap;

use super::code_table::CodeTable;

/// Encode `text` by concatenating the code of every byte, in order.
///
/// The table is expected to come from the same text's frequency count, so
/// every byte has a code; a byte without one contributes nothing.
pub fn text_to_bits(text: &str, table: &CodeTable) -> String {
    let mut bits = String::with_capacity(text.len() * 8);
    for &byte in text.as_bytes() {
        if let Some(code) = table.code(byte) {
            bits.push_str(code);
        }
    }
    trace!("encoded {} bytes into {} bits", text.len(), bits.len());
    bits
}

/// Decode a `'0'`/`'1'` bit-string back into text.
///
/// Scans left to right, growing a candidate buffer. Once the buffer reaches
/// the length of the shortest present code it is tested for an exact match
/// after every added bit; on a match the symbol is appended and the buffer
/// cleared. Prefix-freeness guarantees the first exact match is the leftmost
/// unique parse. Trailing bits that never complete a code are dropped
/// without error.
pub fn bits_to_text(bits: &str, table: &CodeTable) -> String {
    let lookup: FxHashMap<&str, u8> = table.entries().map(|(sym, code)| (code, sym)).collect();
    if lookup.is_empty() {
        return String::new();
    }
    let min_len = table.min_code_len();

    let mut text: Vec<u8> = Vec::new();
    let mut buf = String::new();
    for bit in bits.chars() {
        buf.push(bit);
        if buf.len() < min_len {
            continue;
        }
        if let Some(&symbol) = lookup.get(buf.as_str()) {
            text.push(symbol);
            buf.clear();
        }
    }
    if !buf.is_empty() {
        trace!("dropped {} trailing bits with no code", buf.len());
    }
    String::from_utf8_lossy(&text).into_owned()
}
