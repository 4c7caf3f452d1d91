//! Query engine over a loaded medal table
//!
//! Every query is a one-shot computation over the immutable record list.
//! Grouping uses ordered maps, so groups come out in name order before any
//! ranking sort is applied; the ranking sort is stable.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::errors::{MedalError, Result};
use crate::types::{MedalRecord, MedalTally};

/// One line of the country ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryStanding {
    pub country: String,
    #[serde(flatten)]
    pub tally: MedalTally,
    pub total: u32,
}

/// Medals for one sport within a country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportTally {
    pub sport: String,
    #[serde(flatten)]
    pub tally: MedalTally,
    pub total: u32,
}

pub struct QueryEngine {
    records: Vec<MedalRecord>,
}

impl QueryEngine {
    pub fn new(records: Vec<MedalRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MedalRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Countries sorted by gold, then silver, then bronze, all descending
    ///
    /// Position in the returned list is the rank (1-based when displayed).
    /// Countries tied on all three counts keep name order.
    pub fn rank_countries(&self) -> Vec<CountryStanding> {
        let mut standings: Vec<CountryStanding> =
            group_by(self.records.iter(), MedalRecord::country)
                .into_iter()
                .map(|(country, tally)| CountryStanding {
                    country: country.to_string(),
                    total: tally.total(),
                    tally,
                })
                .collect();

        standings.sort_by(|a, b| b.tally.ranking_key().cmp(&a.tally.ranking_key()));
        standings
    }

    /// Per-sport medal sums for one country
    pub fn sports_by_country(&self, country: &str) -> Result<Vec<SportTally>> {
        let mut matching = self
            .records
            .iter()
            .filter(|r| r.country() == country)
            .peekable();
        if matching.peek().is_none() {
            return Err(MedalError::country_not_found(country));
        }

        Ok(group_by(matching, MedalRecord::sport)
            .into_iter()
            .map(|(sport, tally)| SportTally {
                sport: sport.to_string(),
                total: tally.total(),
                tally,
            })
            .collect())
    }

    /// Records for a sport, optionally restricted to one country
    ///
    /// An empty result is a normal outcome.
    pub fn athletes_by_sport(&self, sport: &str, country: Option<&str>) -> Vec<&MedalRecord> {
        self.records
            .iter()
            .filter(|r| r.sport() == sport)
            .filter(|r| country.map_or(true, |c| r.country() == c))
            .collect()
    }

    /// Distinct countries in first-appearance order
    pub fn countries(&self) -> Vec<&str> {
        unique(self.records.iter().map(MedalRecord::country))
    }

    /// Distinct sports in first-appearance order
    pub fn sports(&self) -> Vec<&str> {
        unique(self.records.iter().map(MedalRecord::sport))
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.records.iter().any(|r| r.country() == country)
    }

    pub fn has_sport(&self, sport: &str) -> bool {
        self.records.iter().any(|r| r.sport() == sport)
    }
}

fn group_by<'a, I, F>(records: I, key: F) -> BTreeMap<&'a str, MedalTally>
where
    I: Iterator<Item = &'a MedalRecord>,
    F: Fn(&'a MedalRecord) -> &'a str,
{
    let mut groups: BTreeMap<&str, MedalTally> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().add(record);
    }
    groups
}

fn unique<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names.filter(|name| seen.insert(*name)).collect()
}
