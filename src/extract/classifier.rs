//! Line classification
//!
//! Each pre-trimmed input line falls into exactly one class. Order matters:
//! country headings win over sport headings, which win over the noise filter.

use serde::Serialize;

use crate::reference::ReferenceSets;
use crate::types::Medal;

/// Why a line was discarded as noise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoiseReason {
    /// Only numeric characters (rank numbers, counts)
    Numeric,
    /// Flag image marker
    FlagMarker,
    /// Contains ':' (times, scores)
    Colon,
    /// Empty or a single character
    TooShort,
}

/// Classification of one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Country,
    Sport,
    Noise(NoiseReason),
    MedalTrigger(Medal),
    Label,
}

impl LineClass {
    pub fn is_heading(&self) -> bool {
        matches!(self, LineClass::Country | LineClass::Sport)
    }
}

/// Classify a line against the reference sets and the noise filter
pub fn classify(line: &str, refs: &ReferenceSets) -> LineClass {
    if refs.is_country(line) {
        return LineClass::Country;
    }
    if refs.is_sport(line) {
        return LineClass::Sport;
    }
    if let Some(reason) = noise_reason(line) {
        return LineClass::Noise(reason);
    }
    match Medal::from_label(line) {
        Some(medal) => LineClass::MedalTrigger(medal),
        None => LineClass::Label,
    }
}

/// Content filter; `None` means the line survives
pub fn noise_reason(line: &str) -> Option<NoiseReason> {
    if is_numeric(line) {
        Some(NoiseReason::Numeric)
    } else if line.contains("flag") {
        Some(NoiseReason::FlagMarker)
    } else if line.contains(':') {
        Some(NoiseReason::Colon)
    } else if line.chars().count() <= 1 {
        Some(NoiseReason::TooShort)
    } else {
        None
    }
}

fn is_numeric(line: &str) -> bool {
    !line.is_empty() && line.chars().all(char::is_numeric)
}
