//! Row output traits.

use crate::error::TraitError;

/// Accepts the catalog rendered as one flattened field-tuple per
/// record, for external tabular display (a delimited file, a
/// spreadsheet range, stdout).
///
/// Field order and formatting are fixed by the core's renderer; the
/// sink only decides where the rows go.
pub trait RowSink {
    /// Writes all rows, in catalog order.
    fn write_rows(&mut self, rows: &[Vec<String>]) -> Result<(), TraitError>;
}
