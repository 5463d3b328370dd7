//! # Debcat Core
//!
//! Core types, catalog semantics, and the valuation engine for the
//! debcat debenture catalog.
//!
//! This crate provides the foundational building blocks used throughout
//! debcat:
//!
//! - **Types**: Domain-specific types like `Date`, `Symbol`,
//!   `DebentureRecord`, `RawQuote`
//! - **Catalog**: The ordered, symbol-unique record set with
//!   merge-stable canonical ordering
//! - **Valuation**: On-demand effective yield, conversion rate, and
//!   converted-value metrics in exact decimal arithmetic
//! - **Render**: The canonical flattened row for tabular export
//!
//! ## Design Philosophy
//!
//! - **Identity as a key type**: set membership is defined on [`types::Symbol`],
//!   never on mutable enrichment fields
//! - **Derive at render time**: valuation metrics take an explicit
//!   evaluation date and are never stored
//! - **Exact arithmetic**: monetary math is `rust_decimal`, not binary
//!   floating point
//!
//! ## Example
//!
//! ```rust
//! use debcat_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let mut record = DebentureRecord::new(
//!     Symbol::new("vnp.db").unwrap(),
//!     "5N PLUS Inc. 5.75% Debentures",
//! );
//! record.conversion_price = Some(dec!(25));
//! let rate = debcat_core::valuation::conversion_rate(&record).unwrap();
//! assert_eq!(rate, Some(dec!(4.000)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod catalog;
pub mod error;
pub mod render;
pub mod types;
pub mod valuation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Catalog, MergeReport};
    pub use crate::error::{CatalogError, CatalogResult};
    pub use crate::types::{Date, DebentureRecord, RawQuote, Symbol};
}

// Re-export commonly used types at crate root
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use types::{Date, DebentureRecord, RawQuote, Symbol};
