//! Full-listing extraction: document date plus ordered candidate records.

use tracing::debug;

use debcat_core::{CatalogError, CatalogResult, Date, DebentureRecord};

use crate::document_date::parse_document_date;
use crate::listing_line::parse_listing_line;

/// A line starting with this token opens the trailing notes section;
/// extraction stops there outright.
pub const NOTES_SECTION_TOKEN: &str = "Notes";

/// The extraction result: document date and candidate records in
/// original line order.
#[derive(Debug, Clone)]
pub struct ExtractedListing {
    /// The "as of" date from the document's title line.
    pub document_date: Date,
    /// Candidate records, one per data line, in source order.
    pub records: Vec<DebentureRecord>,
}

/// Extracts the full listing from the document's raw text lines.
///
/// Line 0 is the title line carrying the document date, line 1 is a
/// column-heading line and is always skipped; data lines start at
/// index 2. Blank lines (page-break artifacts) are skipped; a line
/// opening the notes section terminates processing - everything after
/// it is ignored, well-formed or not. Identical input always yields
/// the identical record list.
///
/// # Errors
///
/// Returns `CatalogError::ParseError` when the title line carries no
/// recognizable date or any data line cannot yield a symbol and
/// description. Both are fatal: the upstream document format changed
/// and needs operator attention.
pub fn extract_listing(lines: &[String]) -> CatalogResult<ExtractedListing> {
    let first_line = lines
        .first()
        .ok_or_else(|| CatalogError::parse_error(0, "document has no lines"))?;
    let document_date = parse_document_date(first_line)?;

    let mut records = Vec::new();
    for (index, line) in lines.iter().enumerate().skip(2) {
        // Hard stop at the trailing notes section
        if line.starts_with(NOTES_SECTION_TOKEN) {
            debug!(line = index, "reached notes section, stopping extraction");
            break;
        }
        // Page breaks show up as blank lines
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_listing_line(line, index)?);
    }

    debug!(
        document_date = %document_date,
        records = records.len(),
        "extracted listing"
    );
    Ok(ExtractedListing {
        document_date,
        records,
    })
}
