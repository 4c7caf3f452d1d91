//! Medal record and tally types
//!
//! A `MedalRecord` is one medal awarded: the country and sport headings that
//! were in effect, the joined athlete/event label, and exactly one medal flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when several label lines make up one record
pub const LABEL_SEPARATOR: &str = " - ";

/// Medal colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Recognise the literal trigger line for a medal colour.
    ///
    /// Matching is exact: "gold medal" or "Gold medal " are not triggers.
    pub fn from_label(line: &str) -> Option<Medal> {
        match line {
            "Gold medal" => Some(Medal::Gold),
            "Silver medal" => Some(Medal::Silver),
            "Bronze medal" => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold medal",
            Medal::Silver => "Silver medal",
            Medal::Bronze => "Bronze medal",
        }
    }

    /// Gold/silver/bronze column values for this medal
    pub fn flags(&self) -> (u8, u8, u8) {
        match self {
            Medal::Gold => (1, 0, 0),
            Medal::Silver => (0, 1, 0),
            Medal::Bronze => (0, 0, 1),
        }
    }

    /// Inverse of [`Medal::flags`]; `None` unless exactly one flag is 1
    pub fn from_flags(gold: u8, silver: u8, bronze: u8) -> Option<Medal> {
        match (gold, silver, bronze) {
            (1, 0, 0) => Some(Medal::Gold),
            (0, 1, 0) => Some(Medal::Silver),
            (0, 0, 1) => Some(Medal::Bronze),
            _ => None,
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the persisted medal table
///
/// Fields are private so a record always carries exactly one medal flag;
/// the only constructor takes a [`Medal`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MedalRecord {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Sport")]
    sport: String,
    #[serde(rename = "Modality - Athlete")]
    athlete_modality: String,
    #[serde(rename = "Gold")]
    gold: u8,
    #[serde(rename = "Silver")]
    silver: u8,
    #[serde(rename = "Bronze")]
    bronze: u8,
}

impl MedalRecord {
    pub fn new(
        country: impl Into<String>,
        sport: impl Into<String>,
        athlete_modality: impl Into<String>,
        medal: Medal,
    ) -> Self {
        let (gold, silver, bronze) = medal.flags();
        Self {
            country: country.into(),
            sport: sport.into(),
            athlete_modality: athlete_modality.into(),
            gold,
            silver,
            bronze,
        }
    }

    /// Build a record from accumulated label lines
    pub fn from_parts(country: &str, sport: &str, label: &[String], medal: Medal) -> Self {
        Self::new(country, sport, label.join(LABEL_SEPARATOR), medal)
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn sport(&self) -> &str {
        &self.sport
    }

    pub fn athlete_modality(&self) -> &str {
        &self.athlete_modality
    }

    pub fn gold(&self) -> u8 {
        self.gold
    }

    pub fn silver(&self) -> u8 {
        self.silver
    }

    pub fn bronze(&self) -> u8 {
        self.bronze
    }

    pub fn medal(&self) -> Medal {
        match (self.gold, self.silver) {
            (1, _) => Medal::Gold,
            (_, 1) => Medal::Silver,
            _ => Medal::Bronze,
        }
    }
}

/// Summed medal counts for a group of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTally {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalTally {
    pub fn add(&mut self, record: &MedalRecord) {
        self.gold += u32::from(record.gold());
        self.silver += u32::from(record.silver());
        self.bronze += u32::from(record.bronze());
    }

    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }

    /// Ranking key: gold first, then silver, then bronze
    pub fn ranking_key(&self) -> (u32, u32, u32) {
        (self.gold, self.silver, self.bronze)
    }
}
