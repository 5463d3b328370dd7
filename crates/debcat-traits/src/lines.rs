//! Line source trait.

use crate::error::TraitError;

/// Produces the finite ordered sequence of text lines for a source
/// document, given a location reference (local path or remote URL).
///
/// Converting the published binary document into text lines is an
/// implementation concern (e.g. a PDF text extractor); the catalog
/// core only ever sees lines.
pub trait LineSource {
    /// Reads all lines of the document at `location`, in order.
    ///
    /// # Errors
    ///
    /// Any read or conversion failure is fatal to the caller's batch.
    fn read_lines(&self, location: &str) -> Result<Vec<String>, TraitError>;
}
