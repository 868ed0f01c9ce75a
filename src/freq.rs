//! Symbol frequency counting.

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts for every distinct symbol in an input sequence.
///
/// Symbols are never ordered, only compared for equality, so the table also
/// remembers the order in which symbols first appeared. Iteration follows
/// that order, which is what makes tree construction reproducible for equal
/// frequencies.
#[derive(Debug, Clone)]
pub struct FrequencyTable<Symbol> {
    counts: HashMap<Symbol, u64>,
    order: Vec<Symbol>,
}

impl<Symbol> FrequencyTable<Symbol>
where
    Symbol: Clone + Eq + Hash,
{
    /// Count the occurrences of each symbol. Empty input yields an empty
    /// table; symbols that never occur are absent, not present with count 0.
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let mut counts = HashMap::new();
        let mut order = Vec::new();
        for s in symbols {
            let slot = counts.entry(s.clone()).or_insert(0u64);
            if *slot == 0 {
                order.push(s.clone());
            }
            *slot += 1;
        }

        Self { counts, order }
    }

    pub fn count(&self, symbol: &Symbol) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate (symbol, count) pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, u64)> {
        self.order.iter().map(move |s| (s, self.counts[s]))
    }
}
