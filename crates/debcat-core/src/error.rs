//! Error types for the debcat library.
//!
//! This module defines the error type shared by the core crates,
//! providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for debcat operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The main error type for catalog operations.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A source document line could not be parsed.
    ///
    /// This is fatal to the batch: it indicates the upstream listing
    /// format changed and requires operator attention.
    #[error("Parse error at line {line}: {reason}")]
    ParseError {
        /// Zero-based line index in the source document.
        line: usize,
        /// Description of what went wrong.
        reason: String,
    },

    /// Invalid symbol (empty or otherwise unusable as an identity key).
    #[error("Invalid symbol: {reason}")]
    InvalidSymbol {
        /// Reason for invalidity.
        reason: String,
    },

    /// Valuation invoked with an invalid divisor or price.
    ///
    /// Distinct from the absent-input case, which yields an empty
    /// result rather than an error.
    #[error("Valuation error: {value} - {reason}")]
    Valuation {
        /// The offending input value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },
}

impl CatalogError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a parse error for a source document line.
    #[must_use]
    pub fn parse_error(line: usize, reason: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            reason: reason.into(),
        }
    }

    /// Creates an invalid symbol error.
    #[must_use]
    pub fn invalid_symbol(reason: impl Into<String>) -> Self {
        Self::InvalidSymbol {
            reason: reason.into(),
        }
    }

    /// Creates a valuation error.
    #[must_use]
    pub fn valuation(value: Decimal, reason: impl Into<String>) -> Self {
        Self::Valuation {
            value,
            reason: reason.into(),
        }
    }
}
