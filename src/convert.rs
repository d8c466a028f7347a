//! Conversion of the acquisition program's console log into the measurement
//! CSV table consumed by [`crate::analysis`].
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::{ConvertOptions, LogColumns};
use crate::error::{DaqError, Result};
use crate::recorder::CsvRecorder;
use crate::types::{LogRecord, LOG_CSV_HEADER};

/// What a single log line turned into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Record(LogRecord),
    Noise,
    Blank,
}

/// Summary of one conversion run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertReport {
    pub rows_written: usize,
    pub lines_discarded: usize,
    pub blank_lines_skipped: usize,
    /// 1-based line number of the blank line that ended the conversion.
    pub stopped_at_blank: Option<usize>,
    /// Non-empty lines left unread after `stopped_at_blank`, up to the first
    /// unreadable one.
    pub lines_ignored: usize,
}

impl LogRecord {
    /// Picks the measurement fields out of a whitespace-split log line.
    /// Returns `None` when a column lies past the end of `tokens`.
    pub fn from_tokens(tokens: &[&str], columns: &LogColumns) -> Option<Self> {
        let take = |index: usize| tokens.get(index).map(|t| t.to_string());
        Some(Self {
            nmeas: take(columns.nmeas)?,
            nstep: take(columns.nstep)?,
            nsample: strip_last_char(tokens.get(columns.nsample)?).to_string(),
            timestamp: take(columns.timestamp)?,
            time_err: take(columns.time_err)?,
            voltage: take(columns.voltage)?,
            current: take(columns.current)?,
        })
    }
}

fn strip_last_char(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next_back();
    chars.as_str()
}

/// Classifies one log line (without its terminator). `line_no` is only used
/// for error reporting.
pub fn parse_line(line: &str, options: &ConvertOptions, line_no: usize) -> Result<LineOutcome> {
    if line.is_empty() {
        return Ok(LineOutcome::Blank);
    }
    if options.is_noise(line) {
        return Ok(LineOutcome::Noise);
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    LogRecord::from_tokens(&tokens, &options.columns)
        .map(LineOutcome::Record)
        .ok_or_else(|| DaqError::Format {
            line: line_no,
            reason: format!(
                "expected at least {} tokens, found {}",
                options.columns.required_tokens(),
                tokens.len()
            ),
        })
}

/// Streams a log from `reader` into CSV on `writer`.
pub fn convert_reader<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    options: &ConvertOptions,
) -> Result<ConvertReport> {
    let mut recorder = CsvRecorder::new(writer, &LOG_CSV_HEADER)?;
    let mut report = ConvertReport::default();
    let mut lines = reader.lines().enumerate();
    for (index, line) in lines.by_ref() {
        let line = line?;
        let line_no = index + 1;
        match parse_line(&line, options, line_no)? {
            LineOutcome::Record(record) => recorder.write_row(&record)?,
            LineOutcome::Noise => {
                debug!("line {line_no}: skipping diagnostic output: {line}");
                report.lines_discarded += 1;
            }
            LineOutcome::Blank if options.stop_at_blank => {
                report.stopped_at_blank = Some(line_no);
                break;
            }
            LineOutcome::Blank => report.blank_lines_skipped += 1,
        }
    }
    if let Some(line_no) = report.stopped_at_blank {
        for (index, line) in lines {
            match line {
                Ok(line) if !line.is_empty() => report.lines_ignored += 1,
                Ok(_) => {}
                Err(err) => {
                    warn!("line {}: unreadable, stopped counting: {err}", index + 1);
                    break;
                }
            }
        }
        if report.lines_ignored > 0 {
            warn!(
                "blank line {line_no} ended the conversion, {} later lines were not read",
                report.lines_ignored
            );
        }
    }
    report.rows_written = recorder.finish()?;
    Ok(report)
}

/// Converts the log at `input` into a fresh CSV file at `output`.
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConvertReport> {
    let file = File::open(input).map_err(|e| DaqError::io(input, e))?;
    let out = File::create(output).map_err(|e| DaqError::io(output, e))?;
    convert_reader(BufReader::new(file), out, options)
}

/// `<input>.csv`, next to the log.
pub fn csv_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".csv");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
GPIB: Sending \"vset 1,0.000000\" to 5
j 0 jv 0 jr 0: 0.100000 s 0.500000 ms 0.000000 V 0.000001 A
j 1 jv 0 jr 1: 0.200000 s 0.400000 ms 0.000000 V 0.000002 A
Warning: measurement took longer than the sampling period
j 2 jv 1 jr 0: 0.300000 s 0.600000 ms 0.100000 V 0.001000 A
[lock] released /var/lock/gpib/5
j 3 jv 1 jr 1: 0.400000 s 0.500000 ms 0.100000 V 0.001100 A
";

    fn convert(input: &str, options: &ConvertOptions) -> (String, ConvertReport) {
        let mut out = Vec::new();
        let report = convert_reader(input.as_bytes(), &mut out, options).unwrap();
        (String::from_utf8(out).unwrap(), report)
    }

    #[test]
    fn converts_acquisition_line() {
        let outcome = parse_line(
            "j 7 jv 3 jr 2: 1.250000 s 0.125000 ms 0.300000 V 0.000150 A",
            &ConvertOptions::default(),
            1,
        )
        .unwrap();
        let LineOutcome::Record(record) = outcome else {
            panic!("expected a record, got {outcome:?}");
        };
        assert_eq!(record.nmeas, "7");
        assert_eq!(record.nstep, "3");
        assert_eq!(record.nsample, "2");
        assert_eq!(record.timestamp, "1.250000");
        assert_eq!(record.time_err, "0.125000");
        assert_eq!(record.voltage, "0.300000");
        assert_eq!(record.current, "0.000150");
    }

    #[test]
    fn positional_mapping_on_placeholder_tokens() {
        let (csv, _) = convert(
            "X 12 X 3 X 00:01:02: X 1.0 X 5.0 X 0.5 X\n",
            &ConvertOptions::default(),
        );
        assert_eq!(csv.lines().nth(1), Some("12,3,00:01:02,X,X,X,X"));
    }

    #[test]
    fn drops_diagnostic_lines_and_keeps_order() {
        let (csv, report) = convert(LOG, &ConvertOptions::default());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], LOG_CSV_HEADER.join(","));
        assert_eq!(
            &lines[1..],
            &[
                "0,0,0,0.100000,0.500000,0.000000,0.000001",
                "1,0,1,0.200000,0.400000,0.000000,0.000002",
                "2,1,0,0.300000,0.600000,0.100000,0.001000",
                "3,1,1,0.400000,0.500000,0.100000,0.001100",
            ]
        );
        assert!(lines.iter().all(|l| l.split(',').count() == 7));
        assert!(!csv.contains("GPIB") && !csv.contains("Warning") && !csv.contains('['));
        assert_eq!(report.rows_written, 4);
        assert_eq!(report.lines_discarded, 3);
        assert_eq!(report.stopped_at_blank, None);
    }

    #[test]
    fn blank_line_ends_conversion() {
        let input = "\
j 0 jv 0 jr 0: 0.1 s 0.5 ms 0.0 V 0.1 A

j 1 jv 0 jr 1: 0.2 s 0.5 ms 0.0 V 0.1 A
j 2 jv 0 jr 2: 0.3 s 0.5 ms 0.0 V 0.1 A
";
        let (csv, report) = convert(input, &ConvertOptions::default());
        assert_eq!(csv.lines().count(), 2);
        assert_eq!(report.stopped_at_blank, Some(2));
        assert_eq!(report.lines_ignored, 2);
    }

    #[test]
    fn unreadable_tail_after_blank_line_is_not_counted() {
        let mut input = b"j 0 jv 0 jr 0: 0.1 s 0.5 ms 0.0 V 0.1 A\n\n".to_vec();
        input.extend_from_slice(b"j 1 jv 0 jr 1: 0.2 s 0.5 ms 0.0 V 0.1 A\n");
        input.extend_from_slice(b"\xff\xfe\n");
        input.extend_from_slice(b"j 2 jv 0 jr 2: 0.3 s 0.5 ms 0.0 V 0.1 A\n");
        let mut out = Vec::new();
        let report = convert_reader(&input[..], &mut out, &ConvertOptions::default()).unwrap();
        assert_eq!(report.rows_written, 1);
        assert_eq!(report.stopped_at_blank, Some(2));
        assert_eq!(report.lines_ignored, 1);
    }

    #[test]
    fn blank_lines_can_be_skipped() {
        let input = "\
j 0 jv 0 jr 0: 0.1 s 0.5 ms 0.0 V 0.1 A

j 1 jv 0 jr 1: 0.2 s 0.5 ms 0.0 V 0.1 A
";
        let options = ConvertOptions {
            stop_at_blank: false,
            ..ConvertOptions::default()
        };
        let (csv, report) = convert(input, &options);
        assert_eq!(csv.lines().count(), 3);
        assert_eq!(report.blank_lines_skipped, 1);
        assert_eq!(report.stopped_at_blank, None);
    }

    #[test]
    fn short_line_is_a_format_error() {
        let input = "j 0 jv 0 jr 0: 0.1 s 0.5 ms 0.0 V 0.1 A\nj 1 jv 0 jr 1: 0.2 s\n";
        let err = convert_reader(input.as_bytes(), Vec::new(), &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, DaqError::Format { line: 2, .. }), "{err}");
    }

    #[test]
    fn crlf_terminators_are_accepted() {
        let (csv, _) = convert(
            "j 0 jv 0 jr 0: 0.1 s 0.5 ms 0.0 V 0.1 A\r\n\r\nj 1 jv 0 jr 1: 0.2 s 0.5 ms 0.0 V 0.1 A\r\n",
            &ConvertOptions::default(),
        );
        assert_eq!(csv, format!("{}\n0,0,0,0.1,0.5,0.0,0.1\n", LOG_CSV_HEADER.join(",")));
    }

    #[test]
    fn output_path_appends_extension() {
        assert_eq!(
            csv_output_path(Path::new("runs/sweep.log")),
            PathBuf::from("runs/sweep.log.csv")
        );
    }
}
