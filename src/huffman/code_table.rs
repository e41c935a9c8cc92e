use super::tree::Node;

/// Number of distinct symbols a text can contain.
pub const ALPHABET: usize = 256;

/// Per-symbol Huffman codes for one encoded text.
///
/// Codes are strings of `'0'` and `'1'` characters, one per bit. A missing
/// entry means the byte never occurs in the source text. Whenever the tree
/// had two or more leaves the present codes form a prefix-free set, so a
/// greedy left-to-right parse of a bit-string is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<String>; ALPHABET],
}

impl CodeTable {
    /// Walk the tree and record the root-to-leaf path of every symbol,
    /// `'0'` for left and `'1'` for right.
    ///
    /// A lone leaf root would get the empty path, which encodes every
    /// occurrence to zero bits and cannot be decoded back; the lone symbol
    /// is assigned the one-bit code "0" instead so single-symbol texts
    /// still round-trip.
    pub fn from_tree(root: &Node) -> Self {
        let mut table = CodeTable {
            codes: std::array::from_fn(|_| None),
        };
        match root {
            Node::Leaf { symbol, .. } => {
                table.codes[*symbol as usize] = Some("0".to_string());
            }
            Node::Internal { .. } => table.walk(root, String::new()),
        }
        table
    }

    fn walk(&mut self, node: &Node, path: String) {
        match node {
            Node::Leaf { symbol, .. } => {
                self.codes[*symbol as usize] = Some(path);
            }
            Node::Internal { left, right, .. } => {
                self.walk(left, format!("{}0", path));
                self.walk(right, format!("{}1", path));
            }
        }
    }

    /// The code for one symbol, if the symbol occurs in the source text.
    pub fn code(&self, symbol: u8) -> Option<&str> {
        self.codes[symbol as usize].as_deref()
    }

    /// Every present (symbol, code) pair in ascending symbol order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, &str)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(i, code)| code.as_deref().map(|code| (i as u8, code)))
    }

    /// Length of the shortest code present. The decoder never tests a
    /// candidate buffer shorter than this. Zero when no codes are present.
    pub fn min_code_len(&self) -> usize {
        self.entries().map(|(_, code)| code.len()).min().unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use super::CodeTable;
    use crate::huffman::freq_count::freqs;
    use crate::huffman::tree::build_tree;

    fn table_for(text: &[u8]) -> CodeTable {
        CodeTable::from_tree(&build_tree(&freqs(text)).unwrap())
    }

    #[test]
    fn example_code_lengths_test() {
        // freq a:2 b:3 c:1 - 'b' gets one bit, 'a' and 'c' two.
        let table = table_for(b"aabbbc");
        assert_eq!(table.code(b'a'), Some("01"));
        assert_eq!(table.code(b'b'), Some("1"));
        assert_eq!(table.code(b'c'), Some("00"));
        assert_eq!(table.code(b'd'), None);
        assert_eq!(table.min_code_len(), 1);
    }

    #[test]
    fn prefix_free_test() {
        let table = table_for(b"the quick brown fox jumps over the lazy dog");
        let codes: Vec<&str> = table.entries().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn single_symbol_gets_one_bit_test() {
        let table = table_for(b"zzzz");
        assert_eq!(table.code(b'z'), Some("0"));
        assert_eq!(table.entries().count(), 1);
    }

    #[test]
    fn entries_ascend_test() {
        let table = table_for(b"aabbbc");
        let symbols: Vec<u8> = table.entries().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![b'a', b'b', b'c']);
    }
}
