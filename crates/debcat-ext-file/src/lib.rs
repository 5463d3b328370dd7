//! # Debcat Ext File
//!
//! File-based implementations of the debcat collaborator traits:
//!
//! - [`line_source::TextFileLineSource`]: pre-converted listing text
//! - [`catalog_store::JsonCatalogStore`]: JSON catalog with backups
//! - [`quote_source::CsvQuoteSource`]: EOD quote snapshots from CSV
//! - [`row_sink::DelimitedRowSink`]: delimited row export

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod catalog_store;
pub mod line_source;
pub mod quote_source;
pub mod row_sink;

pub use catalog_store::JsonCatalogStore;
pub use line_source::TextFileLineSource;
pub use quote_source::CsvQuoteSource;
pub use row_sink::DelimitedRowSink;
