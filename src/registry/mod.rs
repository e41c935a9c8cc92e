//! Named text registry and the algebra of its operations.

pub mod inspect;

use std::collections::BTreeMap;

use log::{debug, info};

use crate::error::{RegistryError, Result};
use crate::huffman::{codec, freq_count, tree, CodeTable};

pub use inspect::InspectReport;

/// In-memory store of named texts.
///
/// A name is *plain* when only the value map knows it and *encoded* when the
/// code-table map carries a table for it as well; every operation keeps the
/// two maps in step, and each precondition is checked before anything is
/// mutated, so a failed operation leaves the registry untouched.
///
/// The registry is process-local mutable state with no internal locking.
/// Sharing one across threads requires external synchronization.
#[derive(Debug, Default)]
pub struct Registry {
    texts: BTreeMap<String, String>,
    codes: BTreeMap<String, CodeTable>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a value is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.texts.contains_key(name)
    }

    /// Whether `name` carries a code table (is Encoded).
    pub fn is_encoded(&self, name: &str) -> bool {
        self.codes.contains_key(name)
    }

    /// `read`: store a fresh plain text under `name`.
    pub fn insert(&mut self, name: &str, text: String) -> Result<()> {
        if self.texts.contains_key(name) {
            return Err(RegistryError::AlreadyExists(name.to_string()));
        }
        debug!("read {} bytes into \"{}\"", text.len(), name);
        self.texts.insert(name.to_string(), text);
        Ok(())
    }

    /// `flush`: the raw stored value, plain text or bit-string.
    pub fn value(&self, name: &str) -> Result<&str> {
        self.texts
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// `encode`: build a Huffman code over `src`'s text and store the
    /// bit-string and its code table under `dst`, overwriting any value
    /// already there.
    pub fn encode(&mut self, src: &str, dst: &str) -> Result<()> {
        let text = self
            .texts
            .get(src)
            .ok_or_else(|| RegistryError::NotFound(src.to_string()))?;
        if self.codes.contains_key(src) {
            return Err(RegistryError::AlreadyEncoded(src.to_string()));
        }
        if text.is_empty() {
            return Err(RegistryError::EmptyText(src.to_string()));
        }

        let freqs = freq_count::freqs(text.as_bytes());
        // Non-empty text always yields a root.
        let root = match tree::build_tree(&freqs) {
            Some(root) => root,
            None => return Err(RegistryError::EmptyText(src.to_string())),
        };
        let table = CodeTable::from_tree(&root);
        let bits = codec::text_to_bits(text, &table);
        info!(
            "encoded \"{}\" into \"{}\": {} bytes -> {} bits",
            src,
            dst,
            text.len(),
            bits.len()
        );
        self.texts.insert(dst.to_string(), bits);
        self.codes.insert(dst.to_string(), table);
        Ok(())
    }

    /// `decode`: rebuild the text behind an encoded entry and store it as a
    /// plain value under `dst`. The destination never keeps a code table.
    pub fn decode(&mut self, src: &str, dst: &str) -> Result<()> {
        let table = self
            .codes
            .get(src)
            .ok_or_else(|| RegistryError::NotEncoded(src.to_string()))?;
        let bits = self
            .texts
            .get(src)
            .ok_or_else(|| RegistryError::NotFound(src.to_string()))?;
        let text = codec::bits_to_text(bits, table);
        info!(
            "decoded \"{}\" into \"{}\": {} bits -> {} bytes",
            src,
            dst,
            bits.len(),
            text.len()
        );
        self.texts.insert(dst.to_string(), text);
        self.codes.remove(dst);
        Ok(())
    }

    /// `equals`: literal equality of the two raw values, with no regard to
    /// how they are interpreted.
    pub fn equals(&self, a: &str, b: &str) -> Result<bool> {
        let left = self.value(a)?;
        let right = self.value(b)?;
        Ok(left == right)
    }

    /// `concat`: store `value(a) ++ value(b)` under `dst`.
    ///
    /// Overwrites `dst` when it names one of the operands; a collision with
    /// any other existing name is refused. The destination's encodedness is
    /// left as it was - concatenation never creates a code table.
    pub fn concat(&mut self, a: &str, b: &str, dst: &str) -> Result<()> {
        let left = self.value(a)?;
        let right = self.value(b)?;
        let mut text = String::with_capacity(left.len() + right.len());
        text.push_str(left);
        text.push_str(right);
        if dst != a && dst != b && self.texts.contains_key(dst) {
            return Err(RegistryError::AlreadyExists(dst.to_string()));
        }
        debug!("concat \"{}\" ++ \"{}\" -> \"{}\"", a, b, dst);
        self.texts.insert(dst.to_string(), text);
        Ok(())
    }

    /// `merge`: collapse two identical entries into one.
    ///
    /// Both must be plain or both encoded, and their raw values must match
    /// byte for byte. The sources are removed and `dst` receives the shared
    /// value; when the sources were encoded, `dst` also receives `a`'s code
    /// table.
    pub fn merge(&mut self, a: &str, b: &str, dst: &str) -> Result<()> {
        let left = self
            .texts
            .get(a)
            .ok_or_else(|| RegistryError::NotFound(a.to_string()))?;
        let right = self
            .texts
            .get(b)
            .ok_or_else(|| RegistryError::NotFound(b.to_string()))?;
        if self.codes.contains_key(a) != self.codes.contains_key(b) {
            return Err(RegistryError::MixedEncoding {
                a: a.to_string(),
                b: b.to_string(),
            });
        }
        if left != right {
            return Err(RegistryError::TextMismatch {
                a: a.to_string(),
                b: b.to_string(),
            });
        }

        let text = left.clone();
        self.texts.remove(a);
        self.texts.remove(b);
        self.texts.insert(dst.to_string(), text);

        let table = self.codes.remove(a);
        self.codes.remove(b);
        // A stale table under an unrelated dst would leave it half-encoded.
        self.codes.remove(dst);
        let encoded = table.is_some();
        if let Some(table) = table {
            self.codes.insert(dst.to_string(), table);
        }
        info!(
            "merged \"{}\" and \"{}\" into \"{}\" ({})",
            a,
            b,
            dst,
            if encoded { "encoded" } else { "plain" }
        );
        Ok(())
    }

    /// `inspect`: alphabet, sizes and compression ratio of an encoded entry.
    pub fn inspect(&self, name: &str) -> Result<InspectReport> {
        let bits = self
            .texts
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        let table = self
            .codes
            .get(name)
            .ok_or_else(|| RegistryError::NotEncoded(name.to_string()))?;
        Ok(InspectReport::new(bits, table))
    }

    /// `drop <name>`: remove one entry and, when present, its code table.
    pub fn drop_entry(&mut self, name: &str) -> Result<()> {
        if self.texts.remove(name).is_none() {
            return Err(RegistryError::NotFound(name.to_string()));
        }
        self.codes.remove(name);
        debug!("dropped \"{}\"", name);
        Ok(())
    }

    /// `drop`: forget every entry and every code table.
    pub fn drop_all(&mut self) {
        debug!("dropped all {} entries", self.texts.len());
        self.texts.clear();
        self.codes.clear();
    }

    /// `list`: every stored name in ascending order, space separated.
    pub fn list(&self) -> Result<String> {
        if self.texts.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(self
            .texts
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[cfg(test)]
mod test {
    use super::Registry;
    use crate::error::RegistryError;

    fn seeded() -> Registry {
        let mut reg = Registry::new();
        reg.insert("a", "aabbbc".to_string()).unwrap();
        reg.insert("b", "aabbbc".to_string()).unwrap();
        reg
    }

    #[test]
    fn read_rejects_duplicates_test() {
        let mut reg = seeded();
        assert_eq!(
            reg.insert("a", "other".to_string()),
            Err(RegistryError::AlreadyExists("a".to_string()))
        );
        assert_eq!(reg.value("a").unwrap(), "aabbbc");
    }

    #[test]
    fn encode_decode_round_trip_test() {
        let mut reg = seeded();
        reg.encode("a", "az").unwrap();
        assert!(reg.is_encoded("az"));
        assert_eq!(reg.value("az").unwrap(), "010111100");
        reg.decode("az", "back").unwrap();
        assert!(!reg.is_encoded("back"));
        assert_eq!(reg.value("back").unwrap(), "aabbbc");
    }

    #[test]
    fn encode_preconditions_test() {
        let mut reg = seeded();
        reg.insert("empty", String::new()).unwrap();
        assert_eq!(
            reg.encode("missing", "x"),
            Err(RegistryError::NotFound("missing".to_string()))
        );
        assert_eq!(
            reg.encode("empty", "x"),
            Err(RegistryError::EmptyText("empty".to_string()))
        );
        reg.encode("a", "az").unwrap();
        assert_eq!(
            reg.encode("az", "x"),
            Err(RegistryError::AlreadyEncoded("az".to_string()))
        );
        // Failed operations must not create the destination.
        assert!(!reg.contains("x"));
    }

    #[test]
    fn encode_overwrites_destination_test() {
        let mut reg = seeded();
        reg.insert("dst", "old".to_string()).unwrap();
        reg.encode("a", "dst").unwrap();
        assert!(reg.is_encoded("dst"));
        assert_eq!(reg.value("dst").unwrap(), "010111100");
    }

    #[test]
    fn decode_requires_code_table_test() {
        let mut reg = seeded();
        assert_eq!(
            reg.decode("a", "x"),
            Err(RegistryError::NotEncoded("a".to_string()))
        );
    }

    #[test]
    fn decode_clears_stale_destination_table_test() {
        let mut reg = seeded();
        reg.encode("a", "az").unwrap();
        reg.encode("b", "bz").unwrap();
        // Decoding over an encoded name must leave it plain.
        reg.decode("az", "bz").unwrap();
        assert!(!reg.is_encoded("bz"));
        assert_eq!(reg.value("bz").unwrap(), "aabbbc");
    }

    #[test]
    fn equals_test() {
        let mut reg = seeded();
        assert!(reg.equals("a", "b").unwrap());
        assert!(reg.equals("a", "a").unwrap());
        reg.insert("c", "different".to_string()).unwrap();
        assert!(!reg.equals("a", "c").unwrap());
        assert_eq!(
            reg.equals("a", "nope"),
            Err(RegistryError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn concat_fresh_destination_test() {
        let mut reg = seeded();
        reg.encode("a", "az").unwrap();
        reg.concat("az", "b", "joined").unwrap();
        assert_eq!(reg.value("joined").unwrap(), "010111100aabbbc");
        // Fresh destinations are plain even when an operand was encoded.
        assert!(!reg.is_encoded("joined"));
    }

    #[test]
    fn concat_overwrites_operand_test() {
        let mut reg = seeded();
        reg.concat("a", "b", "a").unwrap();
        assert_eq!(reg.value("a").unwrap(), "aabbbcaabbbc");
    }

    #[test]
    fn concat_refuses_third_name_test() {
        let mut reg = seeded();
        reg.insert("taken", "keep me".to_string()).unwrap();
        assert_eq!(
            reg.concat("a", "b", "taken"),
            Err(RegistryError::AlreadyExists("taken".to_string()))
        );
        assert_eq!(reg.value("taken").unwrap(), "keep me");
    }

    #[test]
    fn merge_plain_test() {
        let mut reg = seeded();
        reg.merge("a", "b", "m").unwrap();
        assert!(!reg.contains("a"));
        assert!(!reg.contains("b"));
        assert_eq!(reg.value("m").unwrap(), "aabbbc");
        assert!(!reg.is_encoded("m"));
    }

    #[test]
    fn merge_encoded_test() {
        let mut reg = seeded();
        reg.encode("a", "ea").unwrap();
        reg.encode("b", "eb").unwrap();
        reg.merge("ea", "eb", "m").unwrap();
        assert!(!reg.contains("ea"));
        assert!(!reg.contains("eb"));
        assert!(reg.is_encoded("m"));
        assert_eq!(reg.value("m").unwrap(), "010111100");
        // The merged entry still decodes.
        reg.decode("m", "out").unwrap();
        assert_eq!(reg.value("out").unwrap(), "aabbbc");
    }

    #[test]
    fn merge_mixed_encoding_refused_test() {
        let mut reg = seeded();
        reg.encode("a", "ea").unwrap();
        // "ea" is encoded, "b" is plain.
        assert!(matches!(
            reg.merge("ea", "b", "m"),
            Err(RegistryError::MixedEncoding { .. })
        ));
        assert!(reg.contains("ea"));
        assert!(reg.contains("b"));
    }

    #[test]
    fn merge_text_mismatch_refused_test() {
        let mut reg = seeded();
        reg.insert("c", "other".to_string()).unwrap();
        assert!(matches!(
            reg.merge("a", "c", "m"),
            Err(RegistryError::TextMismatch { .. })
        ));
        assert!(reg.contains("a"));
        assert!(reg.contains("c"));
    }

    #[test]
    fn merge_onto_operand_test() {
        let mut reg = seeded();
        reg.merge("a", "b", "a").unwrap();
        assert_eq!(reg.value("a").unwrap(), "aabbbc");
        assert!(!reg.contains("b"));
    }

    #[test]
    fn inspect_test() {
        let mut reg = seeded();
        reg.encode("a", "az").unwrap();
        let report = reg.inspect("az").unwrap();
        assert_eq!(report.original_bits, 48);
        assert_eq!(report.encoded_bits, 9);
        assert_eq!(report.compression, 81);
        assert_eq!(
            report.alphabet,
            vec![
                (b'a', "01".to_string()),
                (b'b', "1".to_string()),
                (b'c', "00".to_string())
            ]
        );
        assert_eq!(
            reg.inspect("a"),
            Err(RegistryError::NotEncoded("a".to_string()))
        );
        assert_eq!(
            reg.inspect("nope"),
            Err(RegistryError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn drop_entry_test() {
        let mut reg = seeded();
        reg.encode("a", "az").unwrap();
        reg.drop_entry("az").unwrap();
        assert!(!reg.contains("az"));
        assert!(!reg.is_encoded("az"));
        assert_eq!(
            reg.drop_entry("az"),
            Err(RegistryError::NotFound("az".to_string()))
        );
    }

    #[test]
    fn drop_all_then_list_is_empty_test() {
        let mut reg = seeded();
        reg.encode("a", "az").unwrap();
        reg.drop_all();
        assert_eq!(reg.list(), Err(RegistryError::Empty));
    }

    #[test]
    fn list_ascending_test() {
        let mut reg = Registry::new();
        reg.insert("beta", "1".to_string()).unwrap();
        reg.insert("alpha", "2".to_string()).unwrap();
        reg.insert("gamma", "3".to_string()).unwrap();
        assert_eq!(reg.list().unwrap(), "alpha beta gamma");
    }
}
