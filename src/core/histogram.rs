// Copyright @yucwang 2026

use crate::core::word::RegisterWord;

use std::collections::BTreeMap;

/// Occurrence count per distinct value, ordered by value.
#[derive(Debug, Clone, Default)]
pub struct Histogram<W: RegisterWord> {
    buckets: BTreeMap<W, u64>,
    total: u64,
}

impl<W: RegisterWord> Histogram<W> {
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            total: 0,
        }
    }

    pub fn record(&mut self, value: W) {
        *self.buckets.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, value: W) -> u64 {
        self.buckets.get(&value).copied().unwrap_or(0)
    }

    /// Number of distinct values seen.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of values recorded, repeats included.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn max_count(&self) -> u64 {
        self.buckets.values().copied().max().unwrap_or(0)
    }

    /// Buckets in increasing value order.
    pub fn iter(&self) -> impl Iterator<Item = (W, u64)> + '_ {
        self.buckets.iter().map(|(value, count)| (*value, *count))
    }
}

impl<W: RegisterWord> Extend<W> for Histogram<W> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, values: I) {
        for value in values {
            self.record(value);
        }
    }
}
