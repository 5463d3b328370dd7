//! Plain-text file line source.

use std::fs;
use std::path::Path;

use debcat_traits::error::TraitError;
use debcat_traits::lines::LineSource;

/// Line source reading a pre-converted plain-text listing from disk.
///
/// Conversion of the published binary document to text happens
/// upstream (e.g. `pdftotext -layout`); this source just reads the
/// result line by line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFileLineSource;

impl TextFileLineSource {
    /// Creates a new text-file line source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for TextFileLineSource {
    fn read_lines(&self, location: &str) -> Result<Vec<String>, TraitError> {
        let path = Path::new(location);
        if !path.exists() {
            return Err(TraitError::NotFound(location.to_string()));
        }
        let content = fs::read_to_string(path)?;
        Ok(content.lines().map(str::to_string).collect())
    }
}
