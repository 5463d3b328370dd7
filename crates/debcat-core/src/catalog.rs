//! The catalog: an ordered set of debenture records, unique by symbol.
//!
//! Ordering is the canonical merge-stable sort: first 10 characters of
//! the upper-cased description, then symbol, both ascending. Membership
//! is decided purely on the [`Symbol`] identity key, so a record's
//! mutable enrichment fields never affect set semantics.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::{DebentureRecord, Symbol};

/// Canonical sort key for catalog records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct OrderKey {
    prefix: String,
    symbol: Symbol,
}

impl OrderKey {
    fn for_record(record: &DebentureRecord) -> Self {
        OrderKey {
            prefix: record.description.to_uppercase().chars().take(10).collect(),
            symbol: record.symbol().clone(),
        }
    }
}

/// Outcome of a merge: which symbols were genuinely new.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Symbols added by the merge, in the order they were processed.
    pub added: Vec<Symbol>,
    /// Candidates discarded because their symbol already existed.
    pub discarded: usize,
}

/// An ordered collection of [`DebentureRecord`], unique by symbol.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: BTreeMap<OrderKey, DebentureRecord>,
    symbols: HashSet<Symbol>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of records (typically the persisted
    /// catalog). Duplicate symbols collapse to the first occurrence.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = DebentureRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if a record with this symbol exists.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    /// Inserts a record unless its symbol is already present.
    ///
    /// Returns true if the record was added. An existing record - with
    /// all its enrichment - always wins; there is no field-level merge.
    pub fn insert(&mut self, record: DebentureRecord) -> bool {
        if self.symbols.contains(record.symbol()) {
            return false;
        }
        self.symbols.insert(record.symbol().clone());
        self.records.insert(OrderKey::for_record(&record), record);
        true
    }

    /// Merges newly extracted candidates into the catalog.
    ///
    /// Candidates whose symbol already exists are discarded entirely;
    /// genuinely new records are inserted at their canonical sort
    /// position. No record is ever removed.
    pub fn merge(&mut self, candidates: impl IntoIterator<Item = DebentureRecord>) -> MergeReport {
        let mut report = MergeReport::default();
        for candidate in candidates {
            let symbol = candidate.symbol().clone();
            if self.insert(candidate) {
                info!(symbol = %symbol, "adding new debenture");
                report.added.push(symbol);
            } else {
                report.discarded += 1;
            }
        }
        report
    }

    /// Iterates records in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &DebentureRecord> {
        self.records.values()
    }

    /// Iterates records mutably, in canonical order.
    ///
    /// Used by quote enrichment to set price/date fields. The symbol
    /// is not reachable for mutation; the description is, and it
    /// participates in the sort key, so callers must leave it alone.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DebentureRecord> {
        self.records.values_mut()
    }

    /// Consumes the catalog, yielding records in canonical order.
    #[must_use]
    pub fn into_records(self) -> Vec<DebentureRecord> {
        self.records.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(symbol: &str, description: &str) -> DebentureRecord {
        DebentureRecord::new(Symbol::new(symbol).unwrap(), description)
    }

    #[test]
    fn test_merge_empty_candidates_is_identity() {
        let mut catalog = Catalog::from_records(vec![
            record("A1", "Alpha Corp 5% Debentures"),
            record("Z1", "Zeta Corp 6% Debentures"),
        ]);
        let before: Vec<String> = catalog.iter().map(|r| r.symbol().to_string()).collect();

        let report = catalog.merge(Vec::new());

        assert!(report.added.is_empty());
        let after: Vec<String> = catalog.iter().map(|r| r.symbol().to_string()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_existing_record_wins_over_candidate() {
        let mut enriched = record("VNP.DB", "5N PLUS Inc. 5.75% Debentures");
        enriched.percentage = Some(dec!(5.75));
        enriched.conversion_price = Some(dec!(25));
        let mut catalog = Catalog::from_records(vec![enriched]);

        let candidate = record("VNP.DB", "5N Plus renamed description");
        let report = catalog.merge(vec![candidate]);

        assert!(report.added.is_empty());
        assert_eq!(report.discarded, 1);
        let kept = catalog.iter().next().unwrap();
        assert_eq!(kept.description, "5N PLUS Inc. 5.75% Debentures");
        assert_eq!(kept.conversion_price, Some(dec!(25)));
    }

    #[test]
    fn test_canonical_order_by_description_prefix() {
        let mut catalog = Catalog::new();
        catalog.merge(vec![
            record("Z1", "Zeta Corp"),
            record("A1", "Alpha Corp"),
        ]);
        let symbols: Vec<&str> = catalog.iter().map(|r| r.symbol().as_str()).collect();
        assert_eq!(symbols, vec!["A1", "Z1"]);
    }

    #[test]
    fn test_symbol_breaks_description_ties() {
        let mut catalog = Catalog::new();
        catalog.merge(vec![
            record("B2", "Acme Corp 6% Debentures Series B"),
            record("B1", "Acme Corp 6% Debentures Series A"),
        ]);
        // First 10 chars of both descriptions are identical
        let symbols: Vec<&str> = catalog.iter().map(|r| r.symbol().as_str()).collect();
        assert_eq!(symbols, vec!["B1", "B2"]);
    }

    #[test]
    fn test_duplicate_candidates_collapse_to_first() {
        let mut catalog = Catalog::new();
        let report = catalog.merge(vec![
            record("X1", "First occurrence"),
            record("X1", "Second occurrence"),
        ]);
        assert_eq!(report.added.len(), 1);
        assert_eq!(report.discarded, 1);
        assert_eq!(catalog.iter().next().unwrap().description, "First occurrence");
    }

    #[test]
    fn test_merge_appends_new_to_existing() {
        let mut catalog = Catalog::from_records(vec![record("A1", "Alpha Corp")]);
        let report = catalog.merge(vec![record("M1", "Middle Corp")]);
        assert_eq!(report.added, vec![Symbol::new("M1").unwrap()]);
        assert_eq!(catalog.len(), 2);
    }
}
