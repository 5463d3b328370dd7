//! Delimited row sinks.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use debcat_core::render::SEPARATOR;
use debcat_traits::error::TraitError;
use debcat_traits::output::RowSink;

/// Row sink writing one delimited line per record to any writer.
///
/// Uses the core's canonical `~` delimiter unless overridden.
pub struct DelimitedRowSink<W: Write> {
    writer: W,
    delimiter: char,
}

impl<W: Write> DelimitedRowSink<W> {
    /// Creates a sink with the canonical delimiter.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delimiter: SEPARATOR,
        }
    }

    /// Creates a sink with a custom delimiter.
    pub fn with_delimiter(writer: W, delimiter: char) -> Self {
        Self { writer, delimiter }
    }
}

impl DelimitedRowSink<BufWriter<File>> {
    /// Creates a sink writing to a new file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> RowSink for DelimitedRowSink<W> {
    fn write_rows(&mut self, rows: &[Vec<String>]) -> Result<(), TraitError> {
        for row in rows {
            let line = row.join(&self.delimiter.to_string());
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
