//! The debenture record and its identity key.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{CatalogError, CatalogResult};

/// Exchange ticker symbol - the identity key of a catalog record.
///
/// Catalog membership, equality, and hashing are defined purely on this
/// key; the mutable enrichment fields on [`DebentureRecord`] never
/// participate. Symbols are upper-cased on construction and may not be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol, upper-casing the input.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidSymbol` if the trimmed input is empty.
    pub fn new(s: impl AsRef<str>) -> CatalogResult<Self> {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CatalogError::invalid_symbol("symbol may not be empty"));
        }
        Ok(Symbol(trimmed.to_uppercase()))
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A convertible debenture catalog entry.
///
/// Created either by the listing extractor (static fields only) or
/// loaded from the persisted catalog (full field set). The symbol is
/// immutable once assigned; price/date pairs are set together through
/// the dedicated setters so one is never present without the other.
///
/// Serializes with camelCase keys to match the persisted catalog format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebentureRecord {
    symbol: Symbol,

    /// Free text extracted from the listing.
    pub description: String,

    /// Nominal coupon rate, when parseable from the description.
    #[serde(default)]
    pub percentage: Option<Decimal>,

    /// Issue date, from external reference data.
    #[serde(default)]
    pub issue_date: Option<Date>,

    /// Maturity date, from external reference data.
    #[serde(default)]
    pub maturity_date: Option<Date>,

    /// Instrument's own last traded price.
    #[serde(default)]
    pub last_price: Option<Decimal>,

    /// As-of date for `last_price`.
    #[serde(default)]
    pub last_price_date: Option<Date>,

    /// Prospectus reference (typically a URL).
    #[serde(default)]
    pub prospectus: Option<String>,

    /// Equity ticker the debenture converts into, when convertible.
    #[serde(default)]
    pub underlying_symbol: Option<Symbol>,

    /// Last traded price of the underlying equity.
    #[serde(default)]
    pub underlying_last_price: Option<Decimal>,

    /// As-of date for `underlying_last_price`.
    #[serde(default)]
    pub underlying_last_price_date: Option<Date>,

    /// Price of the underlying per 100 units face value at which
    /// conversion occurs.
    #[serde(default)]
    pub conversion_price: Option<Decimal>,

    /// Operator free-text notes.
    #[serde(default)]
    pub comments: Option<String>,
}

impl DebentureRecord {
    /// Creates a record with static fields only, as the listing
    /// extractor discovers them.
    #[must_use]
    pub fn new(symbol: Symbol, description: impl Into<String>) -> Self {
        Self {
            symbol,
            description: description.into(),
            percentage: None,
            issue_date: None,
            maturity_date: None,
            last_price: None,
            last_price_date: None,
            prospectus: None,
            underlying_symbol: None,
            underlying_last_price: None,
            underlying_last_price_date: None,
            conversion_price: None,
            comments: None,
        }
    }

    /// Returns the identity key.
    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Sets the instrument's own price/date pair.
    pub fn set_last_quote(&mut self, price: Decimal, as_of: Date) {
        self.last_price = Some(price);
        self.last_price_date = Some(as_of);
    }

    /// Sets the underlying equity's price/date pair.
    pub fn set_underlying_quote(&mut self, price: Decimal, as_of: Date) {
        self.underlying_last_price = Some(price);
        self.underlying_last_price_date = Some(as_of);
    }
}
