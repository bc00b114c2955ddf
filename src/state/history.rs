//! History ledger for past conversions.
//!
//! Ordered log of entries (oldest at front, newest at back) with exact-duplicate
//! collapsing and a bounded tail view for display and export.

use std::collections::{HashSet, VecDeque};
use std::fmt;

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;

/// Default number of entries shown and exported.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Default maximum number of entries retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

/// One past conversion.
///
/// Renders as `"{value} {from_unit} → {result:.4} {to_unit}"`; the fixed
/// four-decimal result is what display and export rely on.
///
/// The value uses Rust's shortest round-trip float text. Very small or very
/// large values switch to exponent form with a bare exponent: `1e-5` and
/// `1e16`, not the zero-padded, signed `1e-05` and `1e+16` that `%g`-style
/// formatting produces. Exported files differ from such tools only there.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Input value.
    pub value: f64,
    /// Source unit.
    pub from_unit: String,
    /// Converted value.
    pub result: f64,
    /// Target unit.
    pub to_unit: String,
}

impl HistoryEntry {
    /// Create a new entry.
    pub fn new(
        value: f64,
        from_unit: impl Into<String>,
        result: f64,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            value,
            from_unit: from_unit.into(),
            result,
            to_unit: to_unit.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps a fractional part on integral floats ("100.0").
        write!(
            f,
            "{:?} {} → {:.4} {}",
            self.value, self.from_unit, self.result, self.to_unit
        )
    }
}

/// Ordered, deduplicating conversion log.
///
/// Two entries are duplicates when their rendered text is identical.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLedger {
    /// Create an empty ledger retaining at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Append an entry. If at capacity, the oldest entry is dropped first.
    pub fn append(&mut self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All entries, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    /// The last `n` entries, newest last.
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).collect()
    }

    /// Entries with exact duplicates collapsed to their first occurrence.
    pub fn deduplicated(&self) -> Vec<&HistoryEntry> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|entry| seen.insert(entry.to_string()))
            .collect()
    }

    /// Rewrite the ledger to its deduplicated form. Idempotent.
    pub fn compact(&mut self) {
        let mut seen = HashSet::new();
        self.entries.retain(|entry| seen.insert(entry.to_string()));
    }

    /// Newline-joined text of the last `n` entries, oldest first.
    pub fn export_text(&self, n: usize) -> String {
        self.recent(n)
            .iter()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
