//! Rendering of catalog records as flattened field rows.
//!
//! A rendered row is the 16-field tuple consumed by the row sink:
//! symbol, description, coupon percentage, issue date, maturity date,
//! last price, last price date, effective yield, underlying symbol,
//! underlying last price, underlying last price date, conversion
//! price, conversion rate, converted value, prospectus, comments.
//!
//! Absent values render as empty fields. Monetary fields use 2
//! decimals, percentage-like fields 3, both with thousands separators.
//!
//! The field delimiter is `~`: it cannot appear in exchange symbols
//! and has not been observed in listing descriptions, so free-text
//! fields survive a naive split.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CatalogResult;
use crate::types::{Date, DebentureRecord};
use crate::valuation;

/// Field delimiter for flattened row output.
pub const SEPARATOR: char = '~';

/// Number of fields in a rendered row.
pub const FIELD_COUNT: usize = 16;

/// Formats a decimal with thousands separators and a fixed number of
/// decimal places, rounding half-up.
#[must_use]
pub fn format_grouped(value: Decimal, decimal_places: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{rounded:.prec$}", prec = decimal_places as usize);

    let (sign, body) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3);
    out.push_str(sign);
    let digits = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn money(value: Option<Decimal>) -> String {
    value.map(|v| format_grouped(v, 2)).unwrap_or_default()
}

fn percent(value: Option<Decimal>) -> String {
    value.map(|v| format_grouped(v, 3)).unwrap_or_default()
}

fn date(value: Option<Date>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

/// Renders one record as the canonical field tuple, computing the
/// derived valuation metrics as of `as_of`.
///
/// # Errors
///
/// Propagates valuation errors (zero conversion price, maturity equal
/// to the evaluation date); these indicate bad catalog data and must
/// not be rendered as empty fields.
pub fn render_row(record: &DebentureRecord, as_of: Date) -> CatalogResult<Vec<String>> {
    let effective_yield = valuation::effective_yield(record, as_of)?;
    let conversion_rate = valuation::conversion_rate(record)?;
    let converted_value = valuation::converted_value(record)?;

    Ok(vec![
        record.symbol().to_string(),
        record.description.clone(),
        percent(record.percentage),
        date(record.issue_date),
        date(record.maturity_date),
        money(record.last_price),
        date(record.last_price_date),
        percent(effective_yield),
        record
            .underlying_symbol
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        money(record.underlying_last_price),
        date(record.underlying_last_price_date),
        money(record.conversion_price),
        percent(conversion_rate),
        money(converted_value),
        record.prospectus.clone().unwrap_or_default(),
        record.comments.clone().unwrap_or_default(),
    ])
}

/// Renders one record as a single delimited line.
///
/// # Errors
///
/// Propagates valuation errors from [`render_row`].
pub fn render_line(record: &DebentureRecord, as_of: Date) -> CatalogResult<String> {
    Ok(render_row(record, as_of)?.join(&SEPARATOR.to_string()))
}
