//! Market data source traits.

use serde::{Deserialize, Serialize};

use crate::error::TraitError;
use debcat_core::{RawQuote, Symbol};

/// Source type for market data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    /// Snapshot/request-response (REST APIs)
    Snapshot,
    /// File-based (CSV, JSON)
    File,
    /// Manual entry
    Manual,
}

/// Trait for quote providers.
///
/// Implementations must not fail on "symbol not found" - that is a
/// normal `Ok(None)` outcome. Transport failures are errors, which
/// the enricher treats as recoverable per record.
///
/// Providers with request-rate policies are paced by the caller (one
/// request at a time with a mandatory delay); implementations should
/// not add their own concurrency.
pub trait QuoteSource {
    /// Source type.
    fn source_type(&self) -> SourceType;

    /// Get the current quote for a symbol, or `None` when the source
    /// has no usable data for it.
    fn get_quote(&self, symbol: &Symbol) -> Result<Option<RawQuote>, TraitError>;
}
