//! Date type for catalog and valuation calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CatalogError, CatalogResult};

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// handful of operations the catalog needs and ensuring type safety at
/// the API surface. Serializes as an ISO `yyyy-mm-dd` string, matching
/// the persisted catalog format.
///
/// # Example
///
/// ```rust
/// use debcat_core::types::Date;
///
/// let issued = Date::from_ymd(2018, 9, 30).unwrap();
/// let matures = Date::from_ymd(2023, 9, 30).unwrap();
/// assert_eq!(issued.days_until(matures), 1826);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CatalogResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CatalogError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CatalogResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CatalogError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Parses a long-form date such as `September 30, 2018`.
    ///
    /// This is the format used in the source listing's title line.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDate` if the string does not match.
    pub fn parse_long(s: &str) -> CatalogResult<Self> {
        NaiveDate::parse_from_str(s, "%B %d, %Y")
            .map(Date)
            .map_err(|_| CatalogError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Whole-day count from this date to `other`.
    ///
    /// Negative when `other` is in the past.
    #[must_use]
    pub fn days_until(&self, other: Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `chrono::NaiveDate`.
    #[must_use]
    pub fn inner(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
