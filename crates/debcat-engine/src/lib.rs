//! # Debcat Engine
//!
//! Batch orchestration for the debenture catalog: merging freshly
//! extracted listings into the persisted catalog, enriching records
//! with market quotes, and exporting rendered rows.
//!
//! The engine is single-threaded and sequential by design. Quote
//! enrichment issues one outbound request at a time with an enforced
//! minimum inter-request delay, so there is no concurrent request
//! coordination anywhere - parallelizing would violate the quote
//! provider's rate-limit contract.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod enrich;
pub mod error;
pub mod processor;

pub use config::ProcessorConfig;
pub use enrich::{EnrichmentReport, QuoteEnricher};
pub use error::EngineError;
pub use processor::Processor;
