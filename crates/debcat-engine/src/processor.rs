//! Batch processor: the end-to-end catalog maintenance operations.

use tracing::info;

use debcat_core::catalog::MergeReport;
use debcat_core::render::render_row;
use debcat_core::{Catalog, Date};
use debcat_parser::extract_listing;
use debcat_traits::lines::LineSource;
use debcat_traits::market_data::QuoteSource;
use debcat_traits::output::RowSink;
use debcat_traits::storage::CatalogStore;

use crate::config::ProcessorConfig;
use crate::enrich::{EnrichmentReport, QuoteEnricher};
use crate::error::EngineError;

/// Orchestrates the catalog maintenance batch.
///
/// Each operation is all-or-nothing against the store: the persisted
/// catalog is backed up before any destructive write, and a fatal
/// failure unwinds without partial persistence.
pub struct Processor<'a> {
    config: ProcessorConfig,
    lines: &'a dyn LineSource,
    quotes: &'a dyn QuoteSource,
    store: &'a dyn CatalogStore,
}

impl<'a> Processor<'a> {
    /// Creates a processor over its collaborators.
    #[must_use]
    pub fn new(
        config: ProcessorConfig,
        lines: &'a dyn LineSource,
        quotes: &'a dyn QuoteSource,
        store: &'a dyn CatalogStore,
    ) -> Self {
        Self {
            config,
            lines,
            quotes,
            store,
        }
    }

    /// Discovers new issues from the published listing, merges them
    /// into the persisted catalog, and renders the merged catalog
    /// into the sink.
    ///
    /// Existing records keep all their enrichment; only genuinely new
    /// symbols are added, at their canonical sort position.
    ///
    /// # Errors
    ///
    /// Fatal on listing read/parse failure or any store failure; the
    /// persisted catalog is left untouched in that case.
    pub fn update_listing(
        &self,
        sink: &mut dyn RowSink,
        as_of: Date,
    ) -> Result<MergeReport, EngineError> {
        let persisted = self.store.load()?;
        let raw_lines = self.lines.read_lines(&self.config.listing_location)?;
        let listing = extract_listing(&raw_lines)?;
        info!(
            document_date = %listing.document_date,
            candidates = listing.records.len(),
            "parsed listing"
        );

        self.store.backup()?;
        let mut catalog = Catalog::from_records(persisted);
        let report = catalog.merge(listing.records);
        let records = catalog.into_records();
        self.store.persist(&records)?;
        info!(added = report.added.len(), discarded = report.discarded, "merged listing");

        self.render_into(&records, sink, as_of)?;
        Ok(report)
    }

    /// Refreshes price fields across the catalog from the quote
    /// source, then renders the enriched catalog into the sink.
    ///
    /// # Errors
    ///
    /// Fatal only on store/sink failure; individual quote failures are
    /// recoverable and land in the returned report.
    pub fn update_quotes(
        &self,
        sink: &mut dyn RowSink,
        as_of: Date,
    ) -> Result<EnrichmentReport, EngineError> {
        let persisted = self.store.load()?;
        self.store.backup()?;

        let mut catalog = Catalog::from_records(persisted);
        let enricher = QuoteEnricher::new(self.quotes, self.config.pacing());
        let report = enricher.enrich(&mut catalog);

        let records = catalog.into_records();
        self.store.persist(&records)?;
        self.render_into(&records, sink, as_of)?;
        Ok(report)
    }

    /// Renders the persisted catalog as flattened rows into the sink,
    /// computing valuation metrics as of `as_of`.
    ///
    /// # Errors
    ///
    /// Fatal on store/sink failure or on a valuation validation error
    /// (bad catalog data must not be exported as empty fields).
    pub fn export(&self, sink: &mut dyn RowSink, as_of: Date) -> Result<usize, EngineError> {
        let records = Catalog::from_records(self.store.load()?).into_records();
        self.render_into(&records, sink, as_of)
    }

    fn render_into(
        &self,
        records: &[debcat_core::DebentureRecord],
        sink: &mut dyn RowSink,
        as_of: Date,
    ) -> Result<usize, EngineError> {
        let rows = records
            .iter()
            .map(|record| render_row(record, as_of))
            .collect::<Result<Vec<_>, _>>()?;
        sink.write_rows(&rows)?;
        Ok(rows.len())
    }
}
