//! Reference name sets used to recognise heading lines
//!
//! Membership is exact, whole-line and case-sensitive. The sets are built once
//! at startup (built-in lists or one-name-per-line files) and never mutated.

pub mod builtin;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::{MedalError, Result};

/// Known country and sport names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSets {
    countries: HashSet<String>,
    sports: HashSet<String>,
}

impl ReferenceSets {
    pub fn new<C, S>(countries: C, sports: S) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
            sports: sports.into_iter().map(Into::into).collect(),
        }
    }

    /// Paris 2024 medal-table names
    pub fn builtin() -> Self {
        Self::new(
            builtin::COUNTRIES.iter().copied(),
            builtin::SPORTS.iter().copied(),
        )
    }

    /// Load the sets, replacing either built-in list with a file when given
    pub fn load(countries_file: Option<&Path>, sports_file: Option<&Path>) -> Result<Self> {
        let countries = match countries_file {
            Some(path) => read_name_list(path)?,
            None => builtin::COUNTRIES.iter().map(|s| s.to_string()).collect(),
        };
        let sports = match sports_file {
            Some(path) => read_name_list(path)?,
            None => builtin::SPORTS.iter().map(|s| s.to_string()).collect(),
        };

        tracing::debug!(
            countries = countries.len(),
            sports = sports.len(),
            "reference sets loaded"
        );

        Ok(Self { countries, sports })
    }

    pub fn is_country(&self, line: &str) -> bool {
        self.countries.contains(line)
    }

    pub fn is_sport(&self, line: &str) -> bool {
        self.sports.contains(line)
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn sport_count(&self) -> usize {
        self.sports.len()
    }
}

/// One name per line; surrounding whitespace trimmed, blank lines skipped
fn read_name_list(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        MedalError::ConfigError(format!(
            "Failed to read name list {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
