//! Document "as of" date extraction.

use debcat_core::{CatalogError, CatalogResult, Date};

/// Literal prefix on the listing's title line, ahead of the date.
///
/// Line 0 of the source document reads, for example:
/// `DEBT INSTRUMENTS as of September 30, 2018`
pub const DATE_PREFIX: &str = "DEBT INSTRUMENTS as of ";

/// Extracts the document date from the listing's first line.
///
/// # Errors
///
/// Returns `CatalogError::ParseError` if the line does not carry the
/// expected prefix or a recognizable long-form date after it. This is
/// fatal to the batch: it means the upstream document format changed.
pub fn parse_document_date(first_line: &str) -> CatalogResult<Date> {
    let date_text = first_line
        .trim()
        .strip_prefix(DATE_PREFIX)
        .ok_or_else(|| {
            CatalogError::parse_error(0, format!("title line missing prefix {DATE_PREFIX:?}"))
        })?
        .trim();

    Date::parse_long(date_text)
        .map_err(|_| CatalogError::parse_error(0, format!("unrecognizable date: {date_text:?}")))
}
