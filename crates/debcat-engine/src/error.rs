//! Engine error type.

use thiserror::Error;

use debcat_core::CatalogError;
use debcat_traits::TraitError;

/// Errors surfaced by batch processing.
///
/// Anything reaching the caller through this type is fatal to the
/// batch; recoverable per-record conditions are reported through the
/// enrichment report and the log instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Core parse/valuation failure.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Collaborator (store, source, sink) failure.
    #[error(transparent)]
    Collaborator(#[from] TraitError),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}
