//! Text-to-record extraction
//!
//! Turns the raw medal listing (one token per line) into [`MedalRecord`]s in a
//! single sequential pass. Lines that cannot be used are dropped silently;
//! the pass never fails on content.
//!
//! Pipeline:
//!
//! ```text
//! lines ──► classify ──► ParserState::advance ──► records + report
//! ```

pub mod classifier;
pub mod state;

use indicatif::ProgressBar;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::errors::{MedalError, Result};
use crate::reference::ReferenceSets;
use crate::types::MedalRecord;

pub use classifier::{classify, noise_reason, LineClass, NoiseReason};
pub use state::{Anomaly, ParserState, Transition};

/// Anomaly tagged with the 1-based input line that raised it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineAnomaly {
    pub line_no: usize,
    pub anomaly: Anomaly,
}

/// Outcome of one extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub records: Vec<MedalRecord>,
    pub anomalies: Vec<LineAnomaly>,
    pub lines_seen: usize,
    pub headings: usize,
    pub dropped: usize,
}

/// Single-pass extractor over a fixed pair of reference sets
pub struct Extractor<'a> {
    refs: &'a ReferenceSets,
    progress: Option<ProgressBar>,
}

impl<'a> Extractor<'a> {
    pub fn new(refs: &'a ReferenceSets) -> Self {
        Self {
            refs,
            progress: None,
        }
    }

    /// Tick the given progress bar once per line
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Run the pass, keeping classification counts and anomalies
    ///
    /// Complexity: O(n) in the number of lines
    pub fn run<I>(&self, lines: I) -> ExtractionReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut report = ExtractionReport::default();
        let mut state = ParserState::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let transition = state.advance(line, self.refs);
            report.lines_seen += 1;

            match transition.class {
                LineClass::Country | LineClass::Sport => report.headings += 1,
                LineClass::Noise(reason) => {
                    report.dropped += 1;
                    tracing::trace!(line_no = idx + 1, ?reason, "dropped line");
                }
                LineClass::MedalTrigger(_) | LineClass::Label => {}
            }

            if let Some(anomaly) = transition.anomaly {
                tracing::warn!(line_no = idx + 1, ?anomaly, "pending medal overwritten");
                report.anomalies.push(LineAnomaly {
                    line_no: idx + 1,
                    anomaly,
                });
            }

            if let Some(record) = transition.record {
                tracing::debug!(
                    country = record.country(),
                    sport = record.sport(),
                    label = record.athlete_modality(),
                    "record emitted"
                );
                report.records.push(record);
            }

            state = transition.state;

            if let Some(pb) = &self.progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = &self.progress {
            pb.finish_and_clear();
        }

        tracing::info!(
            lines = report.lines_seen,
            records = report.records.len(),
            dropped = report.dropped,
            anomalies = report.anomalies.len(),
            "extraction pass complete"
        );

        report
    }
}

/// Extract medal records from pre-trimmed lines
pub fn extract<I>(lines: I, refs: &ReferenceSets) -> Vec<MedalRecord>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Extractor::new(refs).run(lines).records
}

/// Read a UTF-8 listing and trim every line
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        MedalError::Generic(format!("Failed to read {}: {}", path.display(), e))
    })?;

    Ok(contents.lines().map(|l| l.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Medal;

    fn refs() -> ReferenceSets {
        ReferenceSets::new(["France", "Brazil"], ["Athletics", "Judo"])
    }

    #[test]
    fn test_listing_with_noise() {
        let lines = [
            "France",
            "flag icon",
            "Athletics",
            "close the row",
            "Jane Doe",
            "Gold medal",
        ];
        let records = extract(lines, &refs());
        assert_eq!(
            records,
            vec![MedalRecord::new(
                "France",
                "Athletics",
                "close the row - Jane Doe",
                Medal::Gold
            )]
        );
    }

    #[test]
    fn test_report_counts() {
        let lines = [
            "1", "France", "France flag", "Athletics", "Men's 100m", "John Roe", "9:79",
            "Silver medal", "Judo", "Women -48 kg", "Bronze medal", "Bronze medal", "Gold medal",
        ];
        let report = Extractor::new(&refs()).run(lines);

        assert_eq!(report.lines_seen, 13);
        assert_eq!(report.headings, 3);
        assert_eq!(report.dropped, 3);
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[0].athlete_modality(), "Men's 100m - John Roe");
        assert_eq!(report.records[1].sport(), "Judo");
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].line_no, 13);
    }

    #[test]
    fn test_incomplete_tail_is_dropped() {
        let records = extract(["France", "Athletics", "Jane Doe"], &refs());
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_lines_trims() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dump.txt");
        fs::write(&path, "  France \r\nAthletics\n\tGold medal\n").unwrap();
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["France", "Athletics", "Gold medal"]);
    }
}
