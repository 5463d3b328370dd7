//! JSON file catalog store with timestamped backups.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use debcat_core::DebentureRecord;
use debcat_traits::error::TraitError;
use debcat_traits::storage::CatalogStore;

/// Catalog store backed by a single pretty-printed JSON file.
///
/// The file holds the full catalog as a JSON array of records with
/// camelCase keys. `backup` copies the current file to
/// `<file>.bak_<yyyy-mm-dd_HH:MM>` before a destructive update.
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    /// Creates a store over the given catalog file path.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The catalog file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonCatalogStore {
    fn load(&self) -> Result<Vec<DebentureRecord>, TraitError> {
        if !self.path.exists() {
            return Err(TraitError::NotFound(self.path.display().to_string()));
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| TraitError::ParseError(e.to_string()))
    }

    fn persist(&self, records: &[DebentureRecord]) -> Result<(), TraitError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| TraitError::SerializationError(e.to_string()))?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), records = records.len(), "persisted catalog");
        Ok(())
    }

    fn backup(&self) -> Result<(), TraitError> {
        let stamp = chrono::Local::now().format("%Y-%m-%d_%H:%M");
        let backup_path = PathBuf::from(format!("{}.bak_{stamp}", self.path.display()));
        fs::copy(&self.path, &backup_path)?;
        info!(backup = %backup_path.display(), "backed up catalog");
        Ok(())
    }
}
