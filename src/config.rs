// src/config.rs

/// Substrings that mark a log line as a diagnostic message from the
/// acquisition program (GPIB traffic, warnings, bracketed status tags).
pub const DEFAULT_NOISE_MARKERS: [&str; 3] = ["GPIB", "Warning", "["];

/// Token positions of each measurement field in a whitespace-split log line.
///
/// The acquisition program prints
/// `j <NMEAS> jv <NSTEP> jr <NSAMPLE>: <TIMESTAMP> s <TIME_ERR> ms <VOLTAGE> V <CURRENT> A`,
/// so the values sit on the odd positions up to the sample counter and on the
/// even positions after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogColumns {
    pub nmeas: usize,
    pub nstep: usize,
    /// Carries a trailing `:` in the log, stripped on conversion.
    pub nsample: usize,
    pub timestamp: usize,
    pub time_err: usize,
    pub voltage: usize,
    pub current: usize,
}

impl LogColumns {
    /// Minimum token count a line needs for every column to be present.
    pub fn required_tokens(&self) -> usize {
        [
            self.nmeas,
            self.nstep,
            self.nsample,
            self.timestamp,
            self.time_err,
            self.voltage,
            self.current,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

impl Default for LogColumns {
    fn default() -> Self {
        Self {
            nmeas: 1,
            nstep: 3,
            nsample: 5,
            timestamp: 6,
            time_err: 8,
            voltage: 10,
            current: 12,
        }
    }
}

/// Knobs for the log converter.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Treat the first empty line as the end of the useful data. Older
    /// acquisition runs appended a blank line before their shutdown chatter.
    pub stop_at_blank: bool,
    pub noise_markers: Vec<String>,
    pub columns: LogColumns,
}

impl ConvertOptions {
    pub fn is_noise(&self, line: &str) -> bool {
        self.noise_markers
            .iter()
            .any(|marker| line.contains(marker.as_str()))
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            stop_at_blank: true,
            noise_markers: DEFAULT_NOISE_MARKERS.iter().map(|m| m.to_string()).collect(),
            columns: LogColumns::default(),
        }
    }
}
