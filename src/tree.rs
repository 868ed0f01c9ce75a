//! Huffman tree construction.

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use derivative::Derivative;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;
use tracing::debug;

/// A node in a strictly binary Huffman tree: every internal node owns exactly
/// two children, and only leaves carry symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<Symbol> {
    Leaf {
        symbol: Symbol,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node<Symbol>>,
        right: Box<Node<Symbol>>,
    },
}

impl<Symbol> Node<Symbol> {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }
}

/// Priority-queue entry. Ordered by (freq, seq) only; the tree payload never
/// participates in comparisons. `seq` is the insertion sequence number, which
/// breaks frequency ties deterministically: leaves in first-appearance order,
/// then merged nodes in creation order.
#[derive(Debug, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry<Symbol> {
    freq: u64,
    seq: u64,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: Node<Symbol>,
}

/// Build the Huffman tree for a frequency table.
///
/// Repeatedly merges the two lowest-frequency nodes; the first pop becomes
/// the left child, the second the right. A table with one distinct symbol
/// yields a root that is itself a leaf.
///
/// # Errors
/// Returns [`Error::EmptyInput`] for an empty table.
pub fn build_tree<Symbol>(freq: &FrequencyTable<Symbol>) -> Result<Node<Symbol>>
where
    Symbol: Clone + Eq + Hash,
{
    if freq.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut seq = 0u64;
    let mut pq: BinaryHeap<Reverse<HeapEntry<Symbol>>> = BinaryHeap::with_capacity(freq.len());
    for (symbol, count) in freq.iter() {
        pq.push(Reverse(HeapEntry {
            freq: count,
            seq,
            node: Node::Leaf {
                symbol: symbol.clone(),
                freq: count,
            },
        }));
        seq += 1;
    }

    debug!(leaves = freq.len(), "building huffman tree");

    while pq.len() > 1 {
        let Reverse(left) = pq.pop().unwrap();
        let Reverse(right) = pq.pop().unwrap();

        pq.push(Reverse(HeapEntry {
            freq: left.freq + right.freq,
            seq,
            node: Node::Internal {
                freq: left.freq + right.freq,
                left: Box::new(left.node),
                right: Box::new(right.node),
            },
        }));
        seq += 1;
    }

    match pq.pop() {
        Some(Reverse(entry)) => Ok(entry.node),
        None => Err(Error::EmptyInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_is_rejected() {
        let freq = FrequencyTable::<u8>::from_symbols(&[]);
        assert!(matches!(build_tree(&freq), Err(Error::EmptyInput)));
    }

    #[test]
    fn single_symbol_yields_leaf_root() {
        let freq = FrequencyTable::from_symbols(b"AAAA");
        let root = build_tree(&freq).unwrap();
        assert_eq!(
            root,
            Node::Leaf {
                symbol: b'A',
                freq: 4
            }
        );
    }

    #[test]
    fn root_frequency_is_input_length() {
        let input = b"AABBBCCCC";
        let freq = FrequencyTable::from_symbols(input);
        let root = build_tree(&freq).unwrap();
        assert_eq!(root.freq(), input.len() as u64);
    }

    #[test]
    fn merge_order_is_deterministic() {
        // A (2) and B (3) merge first into a node of weight 5; C (4) then
        // pops before it, becoming the left child of the root.
        let freq = FrequencyTable::from_symbols(b"AABBBCCCC");
        let root = build_tree(&freq).unwrap();

        let Node::Internal { left, right, .. } = root else {
            panic!("expected internal root");
        };
        assert_eq!(
            *left,
            Node::Leaf {
                symbol: b'C',
                freq: 4
            }
        );
        let Node::Internal {
            left: a, right: b, ..
        } = *right
        else {
            panic!("expected internal right child");
        };
        assert_eq!(
            *a,
            Node::Leaf {
                symbol: b'A',
                freq: 2
            }
        );
        assert_eq!(
            *b,
            Node::Leaf {
                symbol: b'B',
                freq: 3
            }
        );
    }

    #[test]
    fn equal_frequencies_break_ties_by_first_appearance() {
        let freq = FrequencyTable::from_symbols(b"xyzw");
        let root = build_tree(&freq).unwrap();

        // x and y (seq 0 and 1) merge first, then z and w, then the two
        // internal nodes.
        let Node::Internal { left, .. } = root else {
            panic!("expected internal root");
        };
        let Node::Internal {
            left: x, right: y, ..
        } = *left
        else {
            panic!("expected internal left child");
        };
        assert_eq!(
            *x,
            Node::Leaf {
                symbol: b'x',
                freq: 1
            }
        );
        assert_eq!(
            *y,
            Node::Leaf {
                symbol: b'y',
                freq: 1
            }
        );
    }

    #[test]
    fn repeated_builds_are_identical() {
        let input = b"abracadabra abracadabra";
        let freq = FrequencyTable::from_symbols(input);
        let first = build_tree(&freq).unwrap();
        let second = build_tree(&freq).unwrap();
        assert_eq!(first, second);
    }
}
