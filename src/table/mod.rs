//! Presentable tables
//!
//! A [`Table`] is what the viewer shows and what export writes: a header row
//! and string cells, in display order. Query results convert into tables
//! here so the same column layout is used on screen and on disk.

pub mod persist;

use serde::Serialize;
use std::path::Path;

use crate::errors::Result;
use crate::query::{CountryStanding, SportTally};
use crate::types::MedalRecord;

pub use persist::{export_table, load_records, save_records, EXPORT_EXTENSION, MEDAL_HEADERS};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<H: Into<String>>(headers: impl IntoIterator<Item = H>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ranking with a 1-based `Rank` column
    pub fn country_ranking(standings: &[CountryStanding]) -> Self {
        let mut table = Table::new(["Rank", "Country", "Gold", "Silver", "Bronze", "Total"]);
        for (idx, s) in standings.iter().enumerate() {
            table.push_row(vec![
                (idx + 1).to_string(),
                s.country.clone(),
                s.tally.gold.to_string(),
                s.tally.silver.to_string(),
                s.tally.bronze.to_string(),
                s.total.to_string(),
            ]);
        }
        table
    }

    pub fn sport_tallies(tallies: &[SportTally]) -> Self {
        let mut table = Table::new(["Sport", "Gold", "Silver", "Bronze", "Total"]);
        for t in tallies {
            table.push_row(vec![
                t.sport.clone(),
                t.tally.gold.to_string(),
                t.tally.silver.to_string(),
                t.tally.bronze.to_string(),
                t.total.to_string(),
            ]);
        }
        table
    }

    /// Medalists view: sport first, then the athlete label and country
    pub fn medalists(records: &[&MedalRecord]) -> Self {
        let mut table = Table::new([
            "Sport",
            "Modality - Athlete",
            "Country",
            "Gold",
            "Silver",
            "Bronze",
        ]);
        for r in records {
            table.push_row(vec![
                r.sport().to_string(),
                r.athlete_modality().to_string(),
                r.country().to_string(),
                r.gold().to_string(),
                r.silver().to_string(),
                r.bronze().to_string(),
            ]);
        }
        table
    }

    /// Width of each column in characters, header included
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(idx) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }

    /// Render the header and each row as padded, space-separated lines
    pub fn render_lines(&self) -> Vec<String> {
        let widths = self.column_widths();
        let format_row = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(format_row(&self.headers));
        lines.extend(self.rows.iter().map(|row| format_row(row)));
        lines
    }

    /// Write the table as CSV, replacing any existing file
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read a CSV file written by [`Table::write_csv`]
    pub fn load_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }
}
