use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// Writes a header line followed by unquoted, `\n`-terminated CSV rows.
/// Every row must have as many fields as the header.
pub struct CsvRecorder<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> CsvRecorder<W> {
    pub fn new(inner: W, header: &[&str]) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(inner);
        writer.write_record(header)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_row<T: Serialize>(&mut self, row: &T) -> Result<()> {
        self.writer.serialize(row)?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_fields<I>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        self.writer.write_record(fields)?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes buffered rows and returns how many data rows were written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.rows)
    }
}
