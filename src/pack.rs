//! Bit packing and greedy prefix decoding.

use crate::code::{CodeBits, CodeTable};
use crate::error::{Error, Result};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use tracing::debug;

/// Largest legal value of the padding header byte.
pub const MAX_PADDING: u8 = 8;

/// A byte-aligned encoded stream: one header byte holding the padding
/// length, then the packed code bits, most-significant-bit first.
///
/// The packer always appends between 1 and 8 zero bits, so `padding` is
/// never 0 on payloads we produce; 0 is still accepted when parsing, for
/// forward compatibility. The code table is not embedded: decoding needs it
/// supplied out of band (see [`crate::code::SerializableCodeTable`] for
/// shipping it alongside).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPayload {
    padding: u8,
    packed: Vec<u8>,
}

impl EncodedPayload {
    /// Number of trailing zero bits appended to reach a byte boundary.
    pub fn padding(&self) -> u8 {
        self.padding
    }

    /// The packed code bits, without the header byte.
    pub fn packed(&self) -> &[u8] {
        &self.packed
    }

    /// Serialize to the wire layout: `[padding] ++ packed`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.packed.len());
        out.push(self.padding);
        out.extend_from_slice(&self.packed);
        out
    }

    /// Parse the wire layout back into a payload.
    ///
    /// # Errors
    /// Returns [`Error::DecodeCorruption`] if the slice has no header byte,
    /// the padding value exceeds 8, or the padding claims more bits than the
    /// packed data holds.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        let (&padding, packed) = raw.split_first().ok_or_else(|| Error::DecodeCorruption {
            detail: "payload shorter than the one-byte header".into(),
        })?;

        if padding > MAX_PADDING {
            return Err(Error::DecodeCorruption {
                detail: format!("padding length {padding} out of range 0..=8"),
            });
        }
        if padding as usize > packed.len() * 8 {
            return Err(Error::DecodeCorruption {
                detail: format!(
                    "padding length {padding} exceeds {} packed bits",
                    packed.len() * 8
                ),
            });
        }

        Ok(Self {
            padding,
            packed: packed.to_vec(),
        })
    }
}

/// Concatenate each symbol's code in input order and pad to a byte boundary.
///
/// Padding is `8 - (bits % 8)`, so an already-aligned bit string still gets
/// a full byte of zeros; the header always records a value in 1..=8.
///
/// # Errors
/// - [`Error::EmptyInput`] if `symbols` is empty.
/// - [`Error::TableMismatch`] if a symbol has no code in the table.
pub fn pack<Symbol>(symbols: &[Symbol], table: &CodeTable<Symbol>) -> Result<EncodedPayload>
where
    Symbol: Clone + Eq + Hash,
{
    if symbols.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut bits = CodeBits::new();
    for (position, symbol) in symbols.iter().enumerate() {
        let code = table.code_for(symbol).ok_or_else(|| Error::TableMismatch {
            detail: format!("symbol at position {position} has no code"),
        })?;
        bits.extend_from_bitslice(code);
    }

    let padding = (8 - bits.len() % 8) as u8;
    for _ in 0..padding {
        bits.push(false);
    }

    debug!(
        symbols = symbols.len(),
        bits = bits.len() - padding as usize,
        padding,
        "packed symbol stream"
    );

    Ok(EncodedPayload {
        padding,
        packed: bits.into_vec(),
    })
}

/// Reverse [`pack`]: strip the padding and greedily match codes against the
/// reverse mapping until the bit string is exhausted.
///
/// The cursor grows bit by bit; prefix-freedom guarantees the first match is
/// the only one, so matching emits the symbol and resets.
///
/// # Errors
/// - [`Error::TableMismatch`] if the table is empty, or the cursor reaches
///   the table's longest code length without matching (no code can ever
///   match such a prefix).
/// - [`Error::DecodeCorruption`] if bits remain that do not complete a code.
pub fn unpack<Symbol>(payload: &EncodedPayload, table: &CodeTable<Symbol>) -> Result<Vec<Symbol>>
where
    Symbol: Clone + Eq + Hash,
{
    if table.is_empty() {
        return Err(Error::TableMismatch {
            detail: "code table is empty".into(),
        });
    }

    let mut bits = BitVec::<u8, Msb0>::from_slice(payload.packed());
    let data_len = bits
        .len()
        .checked_sub(payload.padding() as usize)
        .ok_or_else(|| Error::DecodeCorruption {
            detail: format!(
                "padding length {} exceeds {} packed bits",
                payload.padding(),
                bits.len()
            ),
        })?;
    bits.truncate(data_len);

    let mut out = Vec::new();
    let mut cursor = CodeBits::new();
    for (position, bit) in bits.iter().by_vals().enumerate() {
        cursor.push(bit);
        if let Some(symbol) = table.symbol_for(&cursor) {
            out.push(symbol.clone());
            cursor.clear();
        } else if cursor.len() >= table.max_code_len() {
            return Err(Error::TableMismatch {
                detail: format!("no code matches the stream at bit {position}"),
            });
        }
    }

    if !cursor.is_empty() {
        return Err(Error::DecodeCorruption {
            detail: format!("{} trailing bits do not complete a code", cursor.len()),
        });
    }

    debug!(symbols = out.len(), "unpacked symbol stream");

    Ok(out)
}
