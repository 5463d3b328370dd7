//! # Debcat Traits
//!
//! Trait definitions for the debcat catalog's external collaborators:
//!
//! - [`lines::LineSource`]: raw text lines of the published listing
//! - [`market_data::QuoteSource`]: price quotes for a ticker symbol
//! - [`storage::CatalogStore`]: persisted catalog load/persist/backup
//! - [`output::RowSink`]: rendered row export
//!
//! Implementations are EXTENSIONS (e.g. files, HTTP providers,
//! spreadsheets); this crate carries no runtime dependencies.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod lines;
pub mod market_data;
pub mod output;
pub mod storage;

pub use error::TraitError;
pub use lines::LineSource;
pub use market_data::{QuoteSource, SourceType};
pub use output::RowSink;
pub use storage::CatalogStore;
