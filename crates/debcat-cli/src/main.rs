//! Debcat CLI - maintain the convertible debenture catalog.
//!
//! # Usage
//!
//! ```bash
//! # Merge newly listed issues into the catalog
//! debcat update-list --listing data/DebtInstruments.txt
//!
//! # Refresh prices from an EOD quote snapshot
//! debcat update-quotes --quotes data/quotes.csv
//!
//! # Render valuation rows
//! debcat export --as-of 2024-01-15 --output rows.txt
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands, ExportArgs, UpdateListArgs, UpdateQuotesArgs};

use debcat_core::Date;
use debcat_engine::{Processor, ProcessorConfig};
use debcat_ext_file::{CsvQuoteSource, DelimitedRowSink, JsonCatalogStore, TextFileLineSource};
use debcat_traits::output::RowSink;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ProcessorConfig::from_file(path)?,
        None => ProcessorConfig::default(),
    };
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }

    match cli.command {
        Commands::UpdateList(args) => update_list(config, args),
        Commands::UpdateQuotes(args) => update_quotes(config, args),
        Commands::Export(args) => export(config, args),
    }
}

/// Row sink from configuration: the export file when set, stdout
/// otherwise.
fn make_sink(config: &ProcessorConfig) -> Result<Box<dyn RowSink>> {
    Ok(match &config.export_path {
        Some(path) => Box::new(DelimitedRowSink::create(path)?),
        None => Box::new(DelimitedRowSink::new(std::io::stdout())),
    })
}

fn update_list(mut config: ProcessorConfig, args: UpdateListArgs) -> Result<()> {
    if let Some(listing) = args.listing {
        config.listing_location = listing;
    }

    let lines = TextFileLineSource::new();
    let quotes = CsvQuoteSource::new(&config.quotes_path)?;
    let store = JsonCatalogStore::new(&config.catalog_path);
    let mut sink = make_sink(&config)?;
    let processor = Processor::new(config, &lines, &quotes, &store);

    let report = processor.update_listing(sink.as_mut(), Date::today())?;
    info!(
        added = report.added.len(),
        discarded = report.discarded,
        "update-list complete"
    );
    for symbol in &report.added {
        println!("Added: {symbol}");
    }
    Ok(())
}

fn update_quotes(mut config: ProcessorConfig, args: UpdateQuotesArgs) -> Result<()> {
    if let Some(quotes_path) = args.quotes {
        config.quotes_path = quotes_path;
    }
    if let Some(pacing_secs) = args.pacing_secs {
        config.pacing_secs = pacing_secs;
    }

    let lines = TextFileLineSource::new();
    let quotes = CsvQuoteSource::new(&config.quotes_path)?;
    let store = JsonCatalogStore::new(&config.catalog_path);
    let mut sink = make_sink(&config)?;
    let processor = Processor::new(config, &lines, &quotes, &store);

    let report = processor.update_quotes(sink.as_mut(), Date::today())?;
    info!(
        updated = report.updated.len(),
        skipped = report.skipped.len(),
        requests = report.requests,
        "update-quotes complete"
    );
    for (symbol, reason) in &report.skipped {
        eprintln!("Skipped {symbol}: {reason}");
    }
    Ok(())
}

fn export(mut config: ProcessorConfig, args: ExportArgs) -> Result<()> {
    if let Some(output) = args.output {
        config.export_path = Some(output);
    }
    let as_of = match &args.as_of {
        Some(s) => Date::parse(s)?,
        None => Date::today(),
    };

    let lines = TextFileLineSource::new();
    let quotes = CsvQuoteSource::new(&config.quotes_path)?;
    let store = JsonCatalogStore::new(&config.catalog_path);
    let mut sink = make_sink(&config)?;
    let processor = Processor::new(config, &lines, &quotes, &store);

    let count = processor.export(sink.as_mut(), as_of)?;
    info!(rows = count, as_of = %as_of, "export complete");
    Ok(())
}
