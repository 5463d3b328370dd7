//! Processor configuration.
//!
//! Everything environment-specific - source locations, file paths, the
//! quote pacing interval - is explicit configuration handed to the
//! processor, never a process-wide constant.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Default pacing between outbound quote requests, in seconds.
///
/// Matches the free-tier request-rate policy of the quote provider.
pub const DEFAULT_PACING_SECS: u64 = 16;

/// Configuration for a catalog batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Location of the published listing (path or URL, interpreted by
    /// the line source).
    pub listing_location: String,

    /// Path of the persisted JSON catalog.
    pub catalog_path: PathBuf,

    /// Location of the quote snapshot consumed by the file-based
    /// quote source.
    pub quotes_path: PathBuf,

    /// Optional path for rendered row export; stdout when absent.
    pub export_path: Option<PathBuf>,

    /// Seconds to wait after each outbound quote request.
    pub pacing_secs: u64,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            listing_location: "data/DebtInstruments.txt".into(),
            catalog_path: "data/DebtInstrumentsProcessed.json".into(),
            quotes_path: "data/quotes.csv".into(),
            export_path: None,
            pacing_secs: DEFAULT_PACING_SECS,
        }
    }
}

impl ProcessorConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` when the file cannot be read or
    /// parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.as_ref().display())))?;
        toml::from_str(&content).map_err(|e| EngineError::Config(e.to_string()))
    }

    /// The pacing delay as a [`Duration`].
    #[must_use]
    pub fn pacing(&self) -> Duration {
        Duration::from_secs(self.pacing_secs)
    }
}
