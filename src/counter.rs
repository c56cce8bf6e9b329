use crate::corpus::{extract, normalize_line, Ngram, NgramKind};
use fnv::FnvHashMap;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::Hash;

/// Occurrence counts keyed by n-gram.
///
/// # Invariants
/// - Every stored count is >= 1; a key exists only once it has been recorded.
#[derive(Debug, Clone)]
pub struct CountTable<K> {
    counts: FnvHashMap<K, u64>,
}

impl<K> Default for CountTable<K> {
    fn default() -> Self {
        Self {
            counts: FnvHashMap::default(),
        }
    }
}

impl<K: Hash + Eq> CountTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments `key`, inserting it at 1 on first sight.
    ///
    /// Takes the borrowed form so `&str` windows only allocate a `String`
    /// when the key is new.
    pub fn record<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_owned(), 1);
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. how many n-grams were recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.counts.iter().map(|(k, &v)| (k, v))
    }
}

impl<K: Hash + Eq + Ord> CountTable<K> {
    /// Snapshot sorted by descending count. Equal counts fall back to
    /// ascending key order so the output is the same on every run.
    pub fn ranked(&self) -> Vec<(&K, u64)> {
        let mut entries: Vec<(&K, u64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| rank_order(a, b));
        entries
    }

    /// The `limit` most frequent entries, in ranked order.
    pub fn top(&self, limit: usize) -> Vec<(&K, u64)> {
        let mut entries = self.ranked();
        entries.truncate(limit);
        entries
    }
}

fn rank_order<K: Ord>(a: &(&K, u64), b: &(&K, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// The three tables a run accumulates into.
#[derive(Debug, Clone, Default)]
pub struct NgramCounts {
    pub unigrams: CountTable<char>,
    pub bigrams: CountTable<String>,
    pub trigrams: CountTable<String>,
    lines: u64,
}

impl NgramCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes one extracted window to the table of its width.
    pub fn record(&mut self, gram: Ngram<'_>) {
        match gram {
            Ngram::Uni(c) => self.unigrams.record(&c),
            Ngram::Bi(s) => self.bigrams.record(s),
            Ngram::Tri(s) => self.trigrams.record(s),
        }
    }

    /// Normalizes a raw line and records every window it contains.
    pub fn add_line(&mut self, raw: &str) {
        let line = normalize_line(raw);
        for gram in extract(&line) {
            self.record(gram);
        }
        self.lines += 1;
    }

    /// Lines fed through `add_line`, including ones that normalized to empty.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// (distinct keys, total occurrences) for one table.
    pub fn stats(&self, kind: NgramKind) -> (usize, u64) {
        match kind {
            NgramKind::Unigrams => (self.unigrams.len(), self.unigrams.total()),
            NgramKind::Bigrams => (self.bigrams.len(), self.bigrams.total()),
            NgramKind::Trigrams => (self.trigrams.len(), self.trigrams.total()),
        }
    }
}
