//! Two-pass quote enrichment with pacing and per-run caching.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{info, warn};

use debcat_core::{Catalog, RawQuote, Symbol};
use debcat_traits::market_data::QuoteSource;

/// Outcome of an enrichment run, for observability.
#[derive(Debug, Clone, Default)]
pub struct EnrichmentReport {
    /// Symbols whose own price was updated.
    pub updated: Vec<Symbol>,
    /// Symbols skipped with the reason (unusable quote, transport
    /// failure). Recoverable; existing field values stay untouched.
    pub skipped: Vec<(Symbol, String)>,
    /// Distinct outbound requests issued (cache hits excluded).
    pub requests: usize,
}

/// Applies externally supplied quotes onto a catalog.
///
/// Pass 1 updates every record's own last price; pass 2 resolves
/// underlying equity prices through a per-run cache keyed by
/// underlying symbol, skipping records that already carry one. Each
/// outbound request is followed by the mandatory pacing delay to
/// respect the provider's request-rate policy - which is also why the
/// passes stay strictly sequential.
pub struct QuoteEnricher<'a> {
    source: &'a dyn QuoteSource,
    pacing: Duration,
}

impl<'a> QuoteEnricher<'a> {
    /// Creates an enricher over a quote source with the given pacing
    /// delay.
    #[must_use]
    pub fn new(source: &'a dyn QuoteSource, pacing: Duration) -> Self {
        Self { source, pacing }
    }

    /// Runs both enrichment passes, mutating price/date fields in
    /// place. Per-record failures are reported, never fatal.
    pub fn enrich(&self, catalog: &mut Catalog) -> EnrichmentReport {
        let mut report = EnrichmentReport::default();
        self.apply_own_quotes(catalog, &mut report);
        self.apply_underlying_quotes(catalog, &mut report);
        info!(
            updated = report.updated.len(),
            skipped = report.skipped.len(),
            requests = report.requests,
            "enrichment complete"
        );
        report
    }

    /// Pass 1: the instrument's own last price, one request per record.
    fn apply_own_quotes(&self, catalog: &mut Catalog, report: &mut EnrichmentReport) {
        for record in catalog.iter_mut() {
            let symbol = record.symbol().clone();
            match self.request(&symbol, report) {
                Ok(Some(quote)) => match quote.usable() {
                    Some((price, as_of)) => {
                        record.set_last_quote(price, as_of);
                        info!(symbol = %symbol, %price, "updated quote");
                        report.updated.push(symbol);
                    }
                    None => {
                        warn!(symbol = %symbol, "no usable quote");
                        report.skipped.push((symbol, "no usable quote".into()));
                    }
                },
                Ok(None) => {
                    warn!(symbol = %symbol, "no quote available");
                    report.skipped.push((symbol, "no quote available".into()));
                }
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "quote request failed");
                    report.skipped.push((symbol, "request failed".into()));
                }
            }
        }
    }

    /// Pass 2: the underlying equity's last price, cached per symbol.
    ///
    /// A record that already has an underlying price is left alone, so
    /// an enriched record is never refreshed within later runs; the
    /// pacing budget goes to symbols still missing data. Unusable
    /// results are cached too - a dead underlying symbol is only
    /// attempted once per run.
    fn apply_underlying_quotes(&self, catalog: &mut Catalog, report: &mut EnrichmentReport) {
        let mut cache: HashMap<Symbol, Option<RawQuote>> = HashMap::new();

        for record in catalog.iter_mut() {
            let Some(underlying) = record.underlying_symbol.clone() else {
                continue;
            };
            if record.underlying_last_price.is_some() {
                continue;
            }

            let quote = match cache.get(&underlying) {
                Some(cached) => cached.clone(),
                None => match self.request(&underlying, report) {
                    // Not-found is a definitive answer and is cached
                    // like any other result; the first encounter is
                    // the only outbound request for this symbol.
                    Ok(fetched) => {
                        cache.insert(underlying.clone(), fetched.clone());
                        fetched
                    }
                    // Transport failures are not cached; the next
                    // record sharing this underlying may retry.
                    Err(e) => {
                        warn!(underlying = %underlying, error = %e, "underlying quote request failed");
                        None
                    }
                },
            };

            match quote.and_then(|q| q.usable()) {
                Some((price, as_of)) => {
                    record.set_underlying_quote(price, as_of);
                    info!(symbol = %record.symbol(), underlying = %underlying, %price, "updated underlying quote");
                }
                None => {
                    warn!(symbol = %record.symbol(), underlying = %underlying, "no usable underlying quote");
                    report
                        .skipped
                        .push((underlying.clone(), "no usable underlying quote".into()));
                }
            }
        }
    }

    /// One outbound request plus the mandatory pacing delay.
    ///
    /// `Ok(None)` means the source definitively has nothing for the
    /// symbol; `Err` is a transport failure.
    fn request(
        &self,
        symbol: &Symbol,
        report: &mut EnrichmentReport,
    ) -> Result<Option<RawQuote>, debcat_traits::TraitError> {
        let result = self.source.get_quote(symbol);
        report.requests += 1;
        self.pace();
        result
    }

    fn pace(&self) {
        if !self.pacing.is_zero() {
            std::thread::sleep(self.pacing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debcat_core::{Date, DebentureRecord};
    use debcat_traits::error::TraitError;
    use debcat_traits::market_data::SourceType;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).unwrap()
    }

    /// Scripted quote source recording every request.
    struct ScriptedSource {
        quotes: HashMap<Symbol, Option<(Decimal, Date)>>,
        requests: RefCell<Vec<Symbol>>,
    }

    impl ScriptedSource {
        fn new(entries: &[(&str, Option<(Decimal, Date)>)]) -> Self {
            Self {
                quotes: entries
                    .iter()
                    .map(|(s, q)| (sym(s), *q))
                    .collect(),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn requests_for(&self, symbol: &str) -> usize {
            let symbol = sym(symbol);
            self.requests.borrow().iter().filter(|s| **s == symbol).count()
        }
    }

    impl QuoteSource for ScriptedSource {
        fn source_type(&self) -> SourceType {
            SourceType::Manual
        }

        fn get_quote(&self, symbol: &Symbol) -> Result<Option<RawQuote>, TraitError> {
            self.requests.borrow_mut().push(symbol.clone());
            Ok(self.quotes.get(symbol).map(|entry| RawQuote {
                symbol: symbol.clone(),
                price: entry.map(|(p, _)| p),
                as_of_date: entry.map(|(_, d)| d),
                source: "scripted".into(),
            }))
        }
    }

    fn day() -> Date {
        Date::from_ymd(2018, 9, 28).unwrap()
    }

    fn record(symbol: &str, underlying: Option<&str>) -> DebentureRecord {
        let mut r = DebentureRecord::new(sym(symbol), format!("{symbol} Debentures"));
        r.underlying_symbol = underlying.map(sym);
        r
    }

    #[test]
    fn test_own_quote_applied() {
        let source = ScriptedSource::new(&[("VNP.DB", Some((dec!(98.50), day())))]);
        let mut catalog = Catalog::from_records(vec![record("VNP.DB", None)]);

        let report = QuoteEnricher::new(&source, Duration::ZERO).enrich(&mut catalog);

        let rec = catalog.iter().next().unwrap();
        assert_eq!(rec.last_price, Some(dec!(98.50)));
        assert_eq!(rec.last_price_date, Some(day()));
        assert_eq!(report.updated, vec![sym("VNP.DB")]);
    }

    #[test]
    fn test_unusable_quote_leaves_fields_untouched() {
        // source knows the symbol but has neither price nor date
        let source = ScriptedSource::new(&[("VNP.DB", None)]);
        let mut existing = record("VNP.DB", None);
        existing.set_last_quote(dec!(97), day());
        let mut catalog = Catalog::from_records(vec![existing]);

        let report = QuoteEnricher::new(&source, Duration::ZERO).enrich(&mut catalog);

        let rec = catalog.iter().next().unwrap();
        assert_eq!(rec.last_price, Some(dec!(97)));
        assert!(report.updated.is_empty());
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_shared_underlying_requested_once() {
        let source = ScriptedSource::new(&[
        // own quotes for both records, plus the shared underlying
            ("A.DB", Some((dec!(99), day()))),
            ("B.DB", Some((dec!(101), day()))),
            ("ACME", Some((dec!(30.50), day()))),
        ]);
        let mut catalog = Catalog::from_records(vec![
            record("A.DB", Some("ACME")),
            record("B.DB", Some("ACME")),
        ]);

        QuoteEnricher::new(&source, Duration::ZERO).enrich(&mut catalog);

        assert_eq!(source.requests_for("ACME"), 1);
        for rec in catalog.iter() {
            assert_eq!(rec.underlying_last_price, Some(dec!(30.50)));
            assert_eq!(rec.underlying_last_price_date, Some(day()));
        }
    }

    #[test]
    fn test_already_enriched_underlying_not_refreshed() {
        let source = ScriptedSource::new(&[("A.DB", Some((dec!(99), day())))]);
        let mut existing = record("A.DB", Some("ACME"));
        existing.set_underlying_quote(dec!(12), day());
        let mut catalog = Catalog::from_records(vec![existing]);

        QuoteEnricher::new(&source, Duration::ZERO).enrich(&mut catalog);

        assert_eq!(source.requests_for("ACME"), 0);
        assert_eq!(
            catalog.iter().next().unwrap().underlying_last_price,
            Some(dec!(12))
        );
    }

    #[test]
    fn test_unknown_underlying_cached_per_run() {
        let source = ScriptedSource::new(&[
            ("A.DB", Some((dec!(99), day()))),
            ("B.DB", Some((dec!(101), day()))),
            ("GONE", None),
        ]);
        let mut catalog = Catalog::from_records(vec![
            record("A.DB", Some("GONE")),
            record("B.DB", Some("GONE")),
        ]);

        QuoteEnricher::new(&source, Duration::ZERO).enrich(&mut catalog);

        // unusable result is cached: one attempt, both records skipped
        assert_eq!(source.requests_for("GONE"), 1);
        assert!(catalog.iter().all(|r| r.underlying_last_price.is_none()));
    }

    #[test]
    fn test_not_found_underlying_requested_once() {
        // "MISS" is absent from the script, so the source answers
        // Ok(None) - a definitive not-found, cached like any result
        let source = ScriptedSource::new(&[
            ("A.DB", Some((dec!(99), day()))),
            ("B.DB", Some((dec!(101), day()))),
        ]);
        let mut catalog = Catalog::from_records(vec![
            record("A.DB", Some("MISS")),
            record("B.DB", Some("MISS")),
        ]);

        QuoteEnricher::new(&source, Duration::ZERO).enrich(&mut catalog);

        assert_eq!(source.requests_for("MISS"), 1);
        assert!(catalog.iter().all(|r| r.underlying_last_price.is_none()));
    }

    #[test]
    fn test_request_count_covers_both_passes() {
        let source = ScriptedSource::new(&[
            ("A.DB", Some((dec!(99), day()))),
            ("ACME", Some((dec!(30.50), day()))),
        ]);
        let mut catalog = Catalog::from_records(vec![record("A.DB", Some("ACME"))]);

        let report = QuoteEnricher::new(&source, Duration::ZERO).enrich(&mut catalog);
        assert_eq!(report.requests, 2);
    }
}
