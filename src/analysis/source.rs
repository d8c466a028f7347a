use std::collections::VecDeque;
use std::io::Read;
use std::str::FromStr;

use crate::error::{DaqError, Result};
use crate::types::{MeasurementRow, StepId};

/// Number of columns in a converted measurement row.
pub const MEASUREMENT_FIELDS: usize = 7;
pub const STEP_COLUMN: usize = 1;
pub const VOLTAGE_COLUMN: usize = 5;
pub const CURRENT_COLUMN: usize = 6;

/// Something that yields measurement rows on demand.
pub trait MeasurementSource {
    fn next_row(&mut self) -> Result<Option<MeasurementRow>>;
}

/// Reads rows from a converted CSV table. The header line is skipped
/// without being checked, so any table with the same column layout works.
pub struct CsvSource<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
}

impl<R: Read> CsvSource<R> {
    pub fn new(reader: R) -> Self {
        let records = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader)
            .into_records();
        Self { records }
    }
}

impl<R: Read> MeasurementSource for CsvSource<R> {
    fn next_row(&mut self) -> Result<Option<MeasurementRow>> {
        match self.records.next() {
            None => Ok(None),
            Some(record) => parse_record(&record?).map(Some),
        }
    }
}

/// Turns one CSV record into a typed row.
pub fn parse_record(record: &csv::StringRecord) -> Result<MeasurementRow> {
    let line = record.position().map_or(0, |p| p.line() as usize);
    if record.len() < MEASUREMENT_FIELDS {
        return Err(DaqError::Format {
            line,
            reason: format!(
                "expected {MEASUREMENT_FIELDS} fields, found {}",
                record.len()
            ),
        });
    }
    Ok(MeasurementRow {
        step: StepId(parse_field(record, STEP_COLUMN, "NSTEP", line)?),
        step_label: record.get(STEP_COLUMN).unwrap_or_default().to_string(),
        voltage: parse_field(record, VOLTAGE_COLUMN, "VOLTAGE(V)", line)?,
        current: parse_field(record, CURRENT_COLUMN, "CURRENT(A)", line)?,
    })
}

fn parse_field<T: FromStr>(
    record: &csv::StringRecord,
    index: usize,
    column: &'static str,
    line: usize,
) -> Result<T> {
    let value = record.get(index).unwrap_or_default();
    value.parse().map_err(|_| DaqError::Parse {
        line,
        column,
        value: value.to_string(),
    })
}

/// In-memory source for tests and for callers that already hold the rows.
pub struct ManualSource {
    queue: VecDeque<MeasurementRow>,
}

impl ManualSource {
    pub fn new(rows: impl IntoIterator<Item = MeasurementRow>) -> Self {
        Self {
            queue: rows.into_iter().collect(),
        }
    }
}

impl MeasurementSource for ManualSource {
    fn next_row(&mut self) -> Result<Option<MeasurementRow>> {
        Ok(self.queue.pop_front())
    }
}
