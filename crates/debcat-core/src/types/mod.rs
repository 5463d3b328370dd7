//! Domain types for the debenture catalog.

mod date;
mod quote;
mod record;

pub use date::Date;
pub use quote::RawQuote;
pub use record::{DebentureRecord, Symbol};
