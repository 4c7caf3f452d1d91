//! Parser state threaded through the extraction pass
//!
//! `ParserState::advance` is a pure transition: it consumes the current state
//! and one line and returns the next state plus whatever the line produced.
//! Country and sport are sticky across records; the pending label and medal
//! are cleared each time a record is emitted.

use serde::Serialize;

use crate::extract::classifier::{classify, LineClass};
use crate::reference::ReferenceSets;
use crate::types::{Medal, MedalRecord};

/// Irregularities noticed while stepping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Anomaly {
    /// A medal line arrived while another medal was still pending; the
    /// earlier medal is discarded and never produces a record
    MedalOverwritten { previous: Medal, replacement: Medal },
}

/// Result of feeding one line to the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ParserState,
    pub class: LineClass,
    pub record: Option<MedalRecord>,
    pub anomaly: Option<Anomaly>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    current_country: Option<String>,
    current_sport: Option<String>,
    pending_label: Vec<String>,
    pending_medal: Option<Medal>,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_country(&self) -> Option<&str> {
        self.current_country.as_deref()
    }

    pub fn current_sport(&self) -> Option<&str> {
        self.current_sport.as_deref()
    }

    pub fn pending_label(&self) -> &[String] {
        &self.pending_label
    }

    pub fn pending_medal(&self) -> Option<Medal> {
        self.pending_medal
    }

    /// Feed one line, returning the next state and an emitted record if the
    /// line completed one
    pub fn step(self, line: &str, refs: &ReferenceSets) -> (ParserState, Option<MedalRecord>) {
        let transition = self.advance(line, refs);
        (transition.state, transition.record)
    }

    /// Feed one line and report its classification and any anomaly as well
    pub fn advance(mut self, line: &str, refs: &ReferenceSets) -> Transition {
        let class = classify(line, refs);
        let mut anomaly = None;

        match class {
            LineClass::Country => self.current_country = Some(line.to_string()),
            LineClass::Sport => self.current_sport = Some(line.to_string()),
            LineClass::Noise(_) => {}
            LineClass::MedalTrigger(medal) => {
                if let Some(previous) = self.pending_medal.replace(medal) {
                    anomaly = Some(Anomaly::MedalOverwritten {
                        previous,
                        replacement: medal,
                    });
                }
            }
            LineClass::Label => self.pending_label.push(line.to_string()),
        }

        // Checked after every line, whatever its class
        let record = self.try_emit();

        Transition {
            state: self,
            class,
            record,
            anomaly,
        }
    }

    fn try_emit(&mut self) -> Option<MedalRecord> {
        let country = self.current_country.as_deref()?;
        let sport = self.current_sport.as_deref()?;
        if self.pending_label.is_empty() {
            return None;
        }
        let medal = self.pending_medal?;

        let record = MedalRecord::from_parts(country, sport, &self.pending_label, medal);
        self.pending_label.clear();
        self.pending_medal = None;
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs() -> ReferenceSets {
        ReferenceSets::new(["France", "Brazil"], ["Athletics", "Judo"])
    }

    fn feed(state: ParserState, lines: &[&str]) -> (ParserState, Vec<MedalRecord>) {
        let refs = refs();
        let mut state = state;
        let mut out = Vec::new();
        for line in lines {
            let (next, record) = state.step(line, &refs);
            state = next;
            out.extend(record);
        }
        (state, out)
    }

    #[test]
    fn test_no_emission_without_all_four() {
        let (state, records) = feed(ParserState::new(), &["France", "Jane Doe", "Gold medal"]);
        assert!(records.is_empty());
        assert_eq!(state.pending_label(), ["Jane Doe".to_string()]);
        assert_eq!(state.pending_medal(), Some(Medal::Gold));
    }

    #[test]
    fn test_late_heading_completes_record() {
        let (state, records) = feed(
            ParserState::new(),
            &["France", "Jane Doe", "Gold medal", "Athletics"],
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sport(), "Athletics");
        assert!(state.pending_label().is_empty());
    }

    #[test]
    fn test_sticky_headings_survive_emission() {
        let (state, records) = feed(
            ParserState::new(),
            &["Brazil", "Judo", "A", "Gold medal", "Bronze medal", "Bb"],
        );
        // "A" is too short to be a label, so the first medal waits for "Bb"
        assert_eq!(records.len(), 1);
        assert_eq!(state.current_country(), Some("Brazil"));
        assert_eq!(state.current_sport(), Some("Judo"));
        assert_eq!(records[0].medal(), Medal::Bronze);
    }

    #[test]
    fn test_medal_overwrite_reports_anomaly() {
        let refs = refs();
        let state = ParserState::new();
        let t = state.advance("Silver medal", &refs);
        assert!(t.anomaly.is_none());
        let t = t.state.advance("Gold medal", &refs);
        assert_eq!(
            t.anomaly,
            Some(Anomaly::MedalOverwritten {
                previous: Medal::Silver,
                replacement: Medal::Gold
            })
        );
        assert_eq!(t.state.pending_medal(), Some(Medal::Gold));
    }

    #[test]
    fn test_noise_leaves_state_untouched() {
        let refs = refs();
        let (state, _) = feed(ParserState::new(), &["France", "Jane Doe"]);
        let before = state.clone();
        let t = state.advance("10:02", &refs);
        assert_eq!(t.state, before);
        assert!(t.record.is_none());
    }
}
