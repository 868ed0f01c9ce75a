//! huffnpuff: a small Huffman entropy coder.
//!
//! Builds an optimal prefix code from the symbol frequencies of an input
//! stream, packs the stream into a byte-aligned payload with a one-byte
//! padding header, and decodes it back. The API is generic over any
//! `Symbol: Clone + Eq + Hash`; bytes are the usual instantiation.
//!
//! ```
//! let text = b"so much depends upon a red wheel barrow";
//! let (payload, table) = huffnpuff::encode(text).unwrap();
//! let decoded = huffnpuff::decode(&payload, &table).unwrap();
//! assert_eq!(decoded, text);
//! ```
//!
//! The payload does not embed the code table; ship a
//! [`SerializableCodeTable`] alongside it when the decoder cannot rebuild
//! the table from the source.

pub mod code;
pub mod error;
pub mod freq;
pub mod pack;
pub mod tree;

pub use code::{CodeTable, SerializableCodeTable};
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use pack::{pack, unpack, EncodedPayload};
pub use tree::{build_tree, Node};

use std::fs;
use std::hash::Hash;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Encode a symbol sequence: count frequencies, build the tree, assign
/// codes, pack. Returns the payload together with the code table that
/// produced it, which [`decode`] needs back.
///
/// # Errors
/// Returns [`Error::EmptyInput`] for an empty sequence.
pub fn encode<Symbol>(symbols: &[Symbol]) -> Result<(EncodedPayload, CodeTable<Symbol>)>
where
    Symbol: Clone + Eq + Hash,
{
    let freq = FrequencyTable::from_symbols(symbols);
    let root = build_tree(&freq)?;
    let table = CodeTable::from_tree(&root);
    let payload = pack(symbols, &table)?;

    Ok((payload, table))
}

/// Decode a payload with the code table it was encoded under.
pub fn decode<Symbol>(payload: &EncodedPayload, table: &CodeTable<Symbol>) -> Result<Vec<Symbol>>
where
    Symbol: Clone + Eq + Hash,
{
    unpack(payload, table)
}

/// Compress a file on disk into `<path>.bin` and return the output path.
///
/// The output holds the wire layout of [`EncodedPayload`]: one padding byte
/// followed by the packed code bits. The code table is not written; a reader
/// must obtain it separately.
///
/// # Errors
/// - [`Error::InputUnavailable`] if the file cannot be read.
/// - [`Error::EmptyInput`] if the file has no content.
/// - [`Error::Io`] if writing the output fails.
pub fn compress_file(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let text = fs::read(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let (payload, _table) = encode(&text)?;

    let mut output = path.as_os_str().to_owned();
    output.push(".bin");
    let output = PathBuf::from(output);
    fs::write(&output, payload.to_bytes())?;

    debug!(
        input = %path.display(),
        output = %output.display(),
        original_bytes = text.len(),
        compressed_bytes = payload.packed().len() + 1,
        "compressed file"
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let text =
            b"This is a really long message, I sure do hope it encodes and decodes properly.";
        let (payload, table) = encode(text).unwrap();
        let decoded = decode(&payload, &table).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(encode::<u8>(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn works_for_non_byte_symbols() {
        let words = vec!["to", "be", "or", "not", "to", "be"];
        let (payload, table) = encode(&words).unwrap();
        let decoded = decode(&payload, &table).unwrap();
        assert_eq!(decoded, words);
    }

    #[test]
    fn table_survives_serialization() {
        let text = b"a table shipped out of band still decodes the payload";
        let (payload, table) = encode(text).unwrap();

        let bytes = rmp_serde::to_vec(&SerializableCodeTable::from(&table)).unwrap();
        let restored: SerializableCodeTable<u8> = rmp_serde::from_slice(&bytes).unwrap();
        let restored = CodeTable::from(restored);

        assert_eq!(decode(&payload, &restored).unwrap(), text);
    }

    #[test]
    fn compress_file_writes_wire_layout() {
        let dir = std::env::temp_dir().join("huffnpuff-test");
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("sample.txt");
        fs::write(&input, b"AABBBCCCC").unwrap();

        let output = compress_file(&input).unwrap();
        assert_eq!(output, dir.join("sample.txt.bin"));
        assert_eq!(fs::read(&output).unwrap(), vec![2, 0b1010_1111, 0b1100_0000]);

        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let missing = Path::new("definitely/not/here.txt");
        match compress_file(missing) {
            Err(Error::InputUnavailable { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected InputUnavailable, got {other:?}"),
        }
    }
}
