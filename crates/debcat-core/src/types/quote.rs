//! Raw quote from a market data source.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Date, Symbol};

/// A raw quote as returned by a quote source.
///
/// Sources return whatever fields they have; a quote is only applied to
/// the catalog when it is *usable* - both the price and its trading
/// date are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuote {
    /// Symbol the quote was requested for.
    pub symbol: Symbol,
    /// Last/closing price.
    pub price: Option<Decimal>,
    /// Latest trading day the price refers to.
    pub as_of_date: Option<Date>,
    /// Source of the quote.
    pub source: String,
}

impl RawQuote {
    /// Returns the price/date pair when both are present.
    #[must_use]
    pub fn usable(&self) -> Option<(Decimal, Date)> {
        match (self.price, self.as_of_date) {
            (Some(price), Some(as_of)) => Some((price, as_of)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).unwrap()
    }

    #[test]
    fn test_usable_requires_both_fields() {
        let mut quote = RawQuote {
            symbol: sym("VNP.DB"),
            price: Some(dec!(98.50)),
            as_of_date: None,
            source: "test".into(),
        };
        assert!(quote.usable().is_none());

        quote.as_of_date = Some(Date::from_ymd(2018, 9, 28).unwrap());
        assert_eq!(
            quote.usable(),
            Some((dec!(98.50), Date::from_ymd(2018, 9, 28).unwrap()))
        );
    }
}
