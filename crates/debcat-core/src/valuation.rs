//! Derived valuation metrics for debenture records.
//!
//! All metrics are computed on demand from the record's current field
//! state plus an explicit evaluation date - nothing is cached, so
//! effective yield moves daily even with unchanged stored data. Absent
//! required inputs yield `Ok(None)` (rendered as an empty field); a
//! zero or undefined divisor is a validation error, never a silently
//! propagated infinity.
//!
//! Monetary and percentage arithmetic is exact [`Decimal`] throughout;
//! rounding is half-up (`MidpointAwayFromZero`).

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Date, DebentureRecord};

/// Par: the fixed reference price against which premium is measured.
const PAR: Decimal = Decimal::ONE_HUNDRED;

/// Fixed year length used to annualize the premium.
const DAYS_IN_YEAR: f64 = 365.0;

/// Annualized effective yield as of `as_of`.
///
/// Coupon rate adjusted for the annualized premium/discount to
/// maturity:
///
/// ```text
/// percentage - (lastPrice - 100) / ((maturityDate - as_of) / 365)
/// ```
///
/// Returns `Ok(None)` when maturity date, last price, or coupon
/// percentage is absent.
///
/// # Errors
///
/// Returns `CatalogError::Valuation` when the maturity date equals the
/// evaluation date, which would make the annualization factor zero.
pub fn effective_yield(record: &DebentureRecord, as_of: Date) -> CatalogResult<Option<Decimal>> {
    let (Some(maturity), Some(last_price), Some(percentage)) =
        (record.maturity_date, record.last_price, record.percentage)
    else {
        return Ok(None);
    };

    let days_to_maturity = as_of.days_until(maturity);
    if days_to_maturity == 0 {
        return Err(CatalogError::valuation(
            last_price,
            format!("maturity date {maturity} equals the evaluation date"),
        ));
    }

    // Real-valued division before converting back to Decimal, so a
    // 180-day horizon does not truncate to zero years.
    let years_to_maturity = Decimal::try_from(days_to_maturity as f64 / DAYS_IN_YEAR)
        .map_err(|e| CatalogError::valuation(last_price, e.to_string()))?;

    let premium = last_price - PAR;
    let annualized_premium = (premium / years_to_maturity)
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);

    Ok(Some(
        (percentage - annualized_premium)
            .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero),
    ))
}

/// Units of the underlying received per 100 face value: `100 / conversionPrice`.
///
/// Returns `Ok(None)` when the record has no conversion price.
///
/// # Errors
///
/// Returns `CatalogError::Valuation` for a zero conversion price.
pub fn conversion_rate(record: &DebentureRecord) -> CatalogResult<Option<Decimal>> {
    let Some(conversion_price) = record.conversion_price else {
        return Ok(None);
    };
    if conversion_price.is_zero() {
        return Err(CatalogError::valuation(
            conversion_price,
            "conversion price may not be zero",
        ));
    }
    Ok(Some(
        (PAR / conversion_price).round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero),
    ))
}

/// Value of the converted position: `underlyingLastPrice * conversionRate`.
///
/// Returns `Ok(None)` when the conversion price or the underlying's
/// last price is absent.
///
/// # Errors
///
/// Returns `CatalogError::Valuation` for a zero conversion price.
pub fn converted_value(record: &DebentureRecord) -> CatalogResult<Option<Decimal>> {
    let Some(underlying_last_price) = record.underlying_last_price else {
        return Ok(None);
    };
    let Some(rate) = conversion_rate(record)? else {
        return Ok(None);
    };
    Ok(Some(
        (underlying_last_price * rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;
    use rust_decimal_macros::dec;

    fn base_record() -> DebentureRecord {
        DebentureRecord::new(
            Symbol::new("VNP.DB").unwrap(),
            "5N PLUS Inc. 5.75% Debentures",
        )
    }

    #[test]
    fn test_effective_yield_one_year_horizon() {
        let as_of = Date::from_ymd(2024, 1, 1).unwrap();
        let mut record = base_record();
        record.maturity_date = Some(as_of.add_days(365));
        record.last_price = Some(dec!(105));
        record.percentage = Some(dec!(6.000));

        // premium 5, years 1.0, annualized premium 5.000
        let result = effective_yield(&record, as_of).unwrap().unwrap();
        assert_eq!(result, dec!(1.000));
    }

    #[test]
    fn test_effective_yield_discount_raises_yield() {
        let as_of = Date::from_ymd(2024, 1, 1).unwrap();
        let mut record = base_record();
        record.maturity_date = Some(as_of.add_days(730));
        record.last_price = Some(dec!(90));
        record.percentage = Some(dec!(6.000));

        // premium -10 over 2 years: -5/yr, yield 6 + 5 = 11
        let result = effective_yield(&record, as_of).unwrap().unwrap();
        assert_eq!(result, dec!(11.000));
    }

    #[test]
    fn test_effective_yield_absent_inputs() {
        let as_of = Date::from_ymd(2024, 1, 1).unwrap();
        let mut record = base_record();
        record.last_price = Some(dec!(105));
        record.percentage = Some(dec!(6.000));
        // no maturity date
        assert_eq!(effective_yield(&record, as_of).unwrap(), None);
    }

    #[test]
    fn test_effective_yield_rejects_maturity_today() {
        let as_of = Date::from_ymd(2024, 1, 1).unwrap();
        let mut record = base_record();
        record.maturity_date = Some(as_of);
        record.last_price = Some(dec!(105));
        record.percentage = Some(dec!(6.000));
        assert!(effective_yield(&record, as_of).is_err());
    }

    #[test]
    fn test_effective_yield_past_maturity() {
        let as_of = Date::from_ymd(2024, 1, 1).unwrap();
        let mut record = base_record();
        record.maturity_date = Some(as_of.add_days(-365));
        record.last_price = Some(dec!(105));
        record.percentage = Some(dec!(6.000));

        // negative horizon flips the premium's sign
        let result = effective_yield(&record, as_of).unwrap().unwrap();
        assert_eq!(result, dec!(11.000));
    }

    #[test]
    fn test_conversion_rate() {
        let mut record = base_record();
        record.conversion_price = Some(dec!(25));
        assert_eq!(conversion_rate(&record).unwrap(), Some(dec!(4.000)));
    }

    #[test]
    fn test_conversion_rate_rounds_half_up() {
        let mut record = base_record();
        record.conversion_price = Some(dec!(16));
        // 100/16 = 6.25 exactly; 100/3 below checks the rounding path
        assert_eq!(conversion_rate(&record).unwrap(), Some(dec!(6.250)));

        record.conversion_price = Some(dec!(3));
        assert_eq!(conversion_rate(&record).unwrap(), Some(dec!(33.333)));
    }

    #[test]
    fn test_conversion_rate_zero_price_is_error() {
        let mut record = base_record();
        record.conversion_price = Some(dec!(0));
        assert!(conversion_rate(&record).is_err());
    }

    #[test]
    fn test_conversion_rate_absent() {
        let record = base_record();
        assert_eq!(conversion_rate(&record).unwrap(), None);
    }

    #[test]
    fn test_converted_value() {
        let mut record = base_record();
        record.conversion_price = Some(dec!(20));
        record.underlying_last_price = Some(dec!(30.50));
        // rate 5.000 x 30.50 = 152.50
        assert_eq!(converted_value(&record).unwrap(), Some(dec!(152.50)));
    }

    #[test]
    fn test_converted_value_absent_underlying() {
        let mut record = base_record();
        record.conversion_price = Some(dec!(20));
        assert_eq!(converted_value(&record).unwrap(), None);
    }
}
