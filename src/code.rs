//! Code assignment: tree traversal into a prefix-free code table.

use crate::tree::Node;
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Working bit-string type. Msb0 over u8 so that packed bytes read
/// most-significant-bit first, matching the wire format.
pub type CodeBits = BitVec<u8, Msb0>;

/// Bijective symbol <-> code mapping derived from a Huffman tree.
///
/// Codes are root-to-leaf paths, 0 = left and 1 = right. Because symbols only
/// live at leaves, no code is a prefix of another, which is what makes the
/// reverse map unambiguous for greedy decoding.
#[derive(Debug, Clone)]
pub struct CodeTable<Symbol> {
    forward: HashMap<Symbol, BitBox<u8, Msb0>>,
    reverse: HashMap<CodeBits, Symbol>,
    max_len: usize,
}

impl<Symbol> CodeTable<Symbol>
where
    Symbol: Clone + Eq + Hash,
{
    /// Walk the tree depth-first, recording each leaf's accumulated path.
    ///
    /// A root that is itself a leaf (single-symbol alphabet) gets the
    /// one-bit code `0`; the natural path would be the empty string, which
    /// is not a usable code.
    pub fn from_tree(root: &Node<Symbol>) -> Self {
        fn walk<Symbol: Clone + Eq + Hash>(
            node: &Node<Symbol>,
            path: &mut CodeBits,
            forward: &mut HashMap<Symbol, BitBox<u8, Msb0>>,
            reverse: &mut HashMap<CodeBits, Symbol>,
        ) {
            match node {
                Node::Leaf { symbol, .. } => {
                    let code: CodeBits = if path.is_empty() {
                        bitvec![u8, Msb0; 0]
                    } else {
                        path.clone()
                    };
                    reverse.insert(code.clone(), symbol.clone());
                    forward.insert(symbol.clone(), code.into_boxed_bitslice());
                }
                Node::Internal { left, right, .. } => {
                    path.push(false);
                    walk(left, path, forward, reverse);
                    path.pop();

                    path.push(true);
                    walk(right, path, forward, reverse);
                    path.pop();
                }
            }
        }

        let mut path = CodeBits::new();
        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();
        walk(root, &mut path, &mut forward, &mut reverse);

        let max_len = forward.values().map(|c| c.len()).max().unwrap_or(0);

        Self {
            forward,
            reverse,
            max_len,
        }
    }

    /// The code assigned to a symbol, if the symbol is in the table.
    pub fn code_for(&self, symbol: &Symbol) -> Option<&BitSlice<u8, Msb0>> {
        self.forward.get(symbol).map(|c| c.as_bitslice())
    }

    /// The symbol a complete code maps to, if any.
    pub fn symbol_for(&self, code: &CodeBits) -> Option<&Symbol> {
        self.reverse.get(code)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Length in bits of the longest code. A cursor that grows past this
    /// without matching can never match.
    pub fn max_code_len(&self) -> usize {
        self.max_len
    }

    /// Iterate (symbol, code) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &BitSlice<u8, Msb0>)> {
        self.forward.iter().map(|(s, c)| (s, c.as_bitslice()))
    }
}

/// Serde-friendly form of a [`CodeTable`].
///
/// Each code is stored as its bit length plus the underlying bytes; the
/// reverse map and max code length are rebuilt on conversion back.
#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableCodeTable<Symbol>
where
    Symbol: Eq + Hash,
{
    codes: HashMap<Symbol, (usize, Box<[u8]>)>,
}

impl<'a, Symbol> From<&'a CodeTable<Symbol>> for SerializableCodeTable<Symbol>
where
    Symbol: Clone + Eq + Hash,
{
    fn from(other: &'a CodeTable<Symbol>) -> Self {
        Self {
            codes: other
                .forward
                .iter()
                .map(|(symbol, code)| {
                    let len = code.len();
                    let bytes = code.clone().into_boxed_slice();

                    (symbol.clone(), (len, bytes))
                })
                .collect(),
        }
    }
}

impl<Symbol> From<SerializableCodeTable<Symbol>> for CodeTable<Symbol>
where
    Symbol: Clone + Eq + Hash,
{
    fn from(other: SerializableCodeTable<Symbol>) -> Self {
        let mut forward = HashMap::with_capacity(other.codes.len());
        let mut reverse = HashMap::with_capacity(other.codes.len());
        let mut max_len = 0;

        for (symbol, (len, bytes)) in other.codes {
            let mut bits = BitBox::<u8, Msb0>::from_boxed_slice(bytes).into_bitvec();
            bits.truncate(len);
            max_len = max_len.max(len);
            reverse.insert(bits.clone(), symbol.clone());
            forward.insert(symbol, bits.into_boxed_bitslice());
        }

        Self {
            forward,
            reverse,
            max_len,
        }
    }
}
