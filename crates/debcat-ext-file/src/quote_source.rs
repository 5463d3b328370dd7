//! CSV-backed quote source.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;

use debcat_core::{Date, RawQuote, Symbol};
use debcat_traits::error::TraitError;
use debcat_traits::market_data::{QuoteSource, SourceType};

/// CSV record for quotes.
#[derive(Debug, Deserialize)]
struct QuoteRecord {
    symbol: String,
    price: Option<Decimal>,
    as_of_date: Option<String>,
}

/// CSV-based quote source for end-of-day snapshots and tests.
///
/// Expected columns: `symbol,price,as_of_date` with ISO dates. A row
/// with a missing price or date still produces a quote - just an
/// unusable one, which the enricher reports and skips.
pub struct CsvQuoteSource {
    file_path: PathBuf,
    quotes: HashMap<Symbol, RawQuote>,
}

impl CsvQuoteSource {
    /// Creates a new CSV quote source.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be parsed.
    pub fn new(file_path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let mut source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            quotes: HashMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reload quotes from file.
    pub fn reload(&mut self) -> Result<(), TraitError> {
        if !self.file_path.exists() {
            return Ok(()); // Empty source
        }

        let mut reader = csv::Reader::from_path(&self.file_path)
            .map_err(|e| TraitError::IoError(e.to_string()))?;

        for result in reader.deserialize() {
            let record: QuoteRecord = result.map_err(|e| TraitError::ParseError(e.to_string()))?;
            let symbol = Symbol::new(&record.symbol)
                .map_err(|e| TraitError::ParseError(e.to_string()))?;

            let quote = RawQuote {
                symbol: symbol.clone(),
                price: record.price,
                as_of_date: record
                    .as_of_date
                    .as_deref()
                    .and_then(|s| Date::parse(s).ok()),
                source: "file".to_string(),
            };
            self.quotes.insert(symbol, quote);
        }

        Ok(())
    }
}

impl QuoteSource for CsvQuoteSource {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    fn get_quote(&self, symbol: &Symbol) -> Result<Option<RawQuote>, TraitError> {
        Ok(self.quotes.get(symbol).cloned())
    }
}
