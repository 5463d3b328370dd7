//! # Debcat Parser
//!
//! Extraction of candidate debenture records from the exchange's
//! periodically published line-oriented text listing.
//!
//! The listing looks like:
//!
//! ```text
//! DEBT INSTRUMENTS as of September 30, 2018
//! Symbol Name Conversion
//! VNP.DB 5N PLUS Inc. 5.75% Debentures 1000
//! ...
//! Notes on this list
//! ```
//!
//! Line 0 carries the document date, line 1 is a heading, data lines
//! follow until the notes section. See [`extractor::extract_listing`].
//!
//! Obtaining the raw lines from the published binary document is the
//! line source's concern ([`debcat_traits`]); this crate only parses.
//!
//! [`debcat_traits`]: https://docs.rs/debcat-traits

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]

pub mod document_date;
pub mod extractor;
pub mod listing_line;

pub use document_date::parse_document_date;
pub use extractor::{extract_listing, ExtractedListing, NOTES_SECTION_TOKEN};
pub use listing_line::parse_listing_line;
