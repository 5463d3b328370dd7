//! Storage traits for catalog persistence.

use crate::error::TraitError;
use debcat_core::DebentureRecord;

/// Persisted catalog storage.
///
/// The store holds the full catalog as an ordered list of fully
/// populated records. `persist` is a full replacement, never an
/// incremental update; callers take a backup first so a fatal failure
/// mid-run can never corrupt the last known-good catalog.
pub trait CatalogStore {
    /// Loads the full persisted catalog.
    ///
    /// # Errors
    ///
    /// Read or parse failures are fatal to the caller's batch.
    fn load(&self) -> Result<Vec<DebentureRecord>, TraitError>;

    /// Persists a full replacement catalog.
    fn persist(&self, records: &[DebentureRecord]) -> Result<(), TraitError>;

    /// Takes an independent backup copy of the current persisted
    /// catalog, ahead of a destructive update.
    fn backup(&self) -> Result<(), TraitError>;
}
