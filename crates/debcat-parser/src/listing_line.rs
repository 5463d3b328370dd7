//! Per-line parsing of listing data rows.

use std::str::FromStr;

use rust_decimal::Decimal;

use debcat_core::{CatalogError, CatalogResult, DebentureRecord, Symbol};

/// Parses one data line of the listing into a candidate record.
///
/// A data line looks like:
///
/// ```text
/// VNP.DB 5N PLUS Inc. 5.75% Debentures 1000
/// ```
///
/// The symbol is the text before the first space (upper-cased); the
/// description is the remainder up to, and excluding, the final
/// space-delimited token (a quantity figure that is intentionally
/// discarded). Coupon extraction from the description is best-effort
/// and never fails the record.
///
/// # Errors
///
/// Returns `CatalogError::ParseError` when the line cannot yield even
/// a symbol/description split (no space separator) - fatal, per the
/// batch error policy. `line_index` is only used for error reporting.
pub fn parse_listing_line(line: &str, line_index: usize) -> CatalogResult<DebentureRecord> {
    let trimmed = line.trim();
    let Some((symbol_text, remainder)) = trimmed.split_once(' ') else {
        return Err(CatalogError::parse_error(
            line_index,
            format!("data line has no space separator: {trimmed:?}"),
        ));
    };

    let symbol = Symbol::new(symbol_text)
        .map_err(|e| CatalogError::parse_error(line_index, e.to_string()))?;

    // Drop the trailing quantity token; what is left is the description.
    let remainder = remainder.trim();
    let description = match remainder.rsplit_once(' ') {
        Some((description, _quantity)) => description.trim(),
        None => "",
    };

    let mut record = DebentureRecord::new(symbol, description);
    record.percentage = extract_coupon(description);
    Ok(record)
}

/// Best-effort coupon extraction: the decimal literal between the last
/// space and the first `%` in the description. Absence or a
/// non-numeric token is not an error.
fn extract_coupon(description: &str) -> Option<Decimal> {
    let before_percent = description.split_once('%')?.0;
    let literal = before_percent
        .rsplit(' ')
        .next()
        .unwrap_or(before_percent)
        .trim();
    Decimal::from_str(literal)
        .ok()
        .filter(|coupon| !coupon.is_sign_negative())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbol_and_description_split() {
        let record = parse_listing_line("VNP.DB 5N PLUS Inc. 5.75% Debentures 1000", 2).unwrap();
        assert_eq!(record.symbol().as_str(), "VNP.DB");
        assert_eq!(record.description, "5N PLUS Inc. 5.75% Debentures");
    }

    #[test]
    fn test_symbol_uppercased() {
        let record = parse_listing_line("vnp.db 5N PLUS Inc. Debentures 1000", 2).unwrap();
        assert_eq!(record.symbol().as_str(), "VNP.DB");
    }

    #[test]
    fn test_trailing_token_dropped() {
        let record = parse_listing_line("ABC Some description words 5000", 2).unwrap();
        assert_eq!(record.description, "Some description words");
    }

    #[test]
    fn test_coupon_extracted() {
        let record = parse_listing_line("ABC ABC Inc. 5.75% Debentures 1000", 2).unwrap();
        assert_eq!(record.percentage, Some(dec!(5.75)));
    }

    #[test]
    fn test_no_percent_sign_leaves_coupon_absent() {
        let record = parse_listing_line("ABC ABC Inc. Floating Debentures 1000", 2).unwrap();
        assert_eq!(record.percentage, None);
    }

    #[test]
    fn test_unparseable_coupon_is_not_an_error() {
        let record = parse_listing_line("ABC ABC Inc. 5.NOT-A-NUMBER% Debentures 1000", 2).unwrap();
        assert_eq!(record.percentage, None);
    }

    #[test]
    fn test_no_space_separator_is_fatal() {
        let err = parse_listing_line("VNP.DB", 7).unwrap_err();
        assert!(err.to_string().contains("line 7"));
    }
}
