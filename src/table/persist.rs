//! Medal table persistence and view export
//!
//! The medal table is a CSV file with a fixed header. Loading validates the
//! header and every row so a hand-edited or truncated file is reported instead
//! of producing silently wrong rankings.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{MedalError, Result};
use crate::table::Table;
use crate::types::{Medal, MedalRecord};

/// Header row of the persisted medal table
pub const MEDAL_HEADERS: [&str; 6] = [
    "Country",
    "Sport",
    "Modality - Athlete",
    "Gold",
    "Silver",
    "Bronze",
];

/// Extension appended to every export base name
pub const EXPORT_EXTENSION: &str = "csv";

#[derive(Debug, Deserialize)]
struct RawRow {
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

/// Write records in table order, header first
pub fn save_records(path: &Path, records: &[MedalRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(MEDAL_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = records.len(), "medal table written");
    Ok(())
}

/// Load and validate a persisted medal table
pub fn load_records(path: &Path) -> Result<Vec<MedalRecord>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    if !headers.iter().eq(MEDAL_HEADERS.iter().copied()) {
        return Err(MedalError::schema(
            1,
            format!(
                "expected header {:?}, found {:?}",
                MEDAL_HEADERS.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        ));
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map_or(0, |p| p.line());

        let raw: RawRow = row
            .deserialize(Some(&headers))
            .map_err(|e| MedalError::schema(line, e.to_string()))?;

        let medal = Medal::from_flags(raw.gold, raw.silver, raw.bronze).ok_or_else(|| {
            MedalError::schema(
                line,
                format!(
                    "expected exactly one medal flag, found Gold={} Silver={} Bronze={}",
                    raw.gold, raw.silver, raw.bronze
                ),
            )
        })?;

        for (name, value) in [
            ("Country", &raw.country),
            ("Sport", &raw.sport),
            ("Modality - Athlete", &raw.athlete_modality),
        ] {
            if value.trim().is_empty() {
                return Err(MedalError::schema(line, format!("{} is empty", name)));
            }
        }

        records.push(MedalRecord::new(
            raw.country,
            raw.sport,
            raw.athlete_modality,
            medal,
        ));
    }

    tracing::info!(path = %path.display(), rows = records.len(), "medal table loaded");
    Ok(records)
}

/// Path an export with the given base name would be written to
pub fn export_path(dir: &Path, base_name: &str) -> PathBuf {
    dir.join(format!("{}.{}", base_name, EXPORT_EXTENSION))
}

/// Write a view to `<dir>/<base_name>.csv`, overwriting any existing file
pub fn export_table(table: &Table, dir: &Path, base_name: &str) -> Result<PathBuf> {
    let base_name = base_name.trim();
    if base_name.is_empty() {
        return Err(MedalError::InputError("export name is empty".to_string()));
    }

    fs::create_dir_all(dir)?;
    let path = export_path(dir, base_name);
    table.write_csv(&path)?;

    tracing::info!(path = %path.display(), rows = table.len(), "view exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<MedalRecord> {
        vec![
            MedalRecord::new("Hong Kong, China", "Fencing", "Women's Épée - Vivian Kong", Medal::Gold),
            MedalRecord::new("Brazil", "Judo", "Women +78 kg - Beatriz Souza", Medal::Gold),
            MedalRecord::new("Brazil", "Judo", "Mixed Team", Medal::Bronze),
        ]
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("olympics.csv");

        save_records(&path, &sample()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Country,Sport,Modality - Athlete,Gold,Silver,Bronze\n"));
        assert!(contents.contains("\"Hong Kong, China\",Fencing"));

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_save_empty_keeps_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        save_records(&path, &[]).unwrap();
        assert!(load_records(&path).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_wrong_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "Country,Sport,Athlete,Gold,Silver,Bronze\nA,B,C,1,0,0\n").unwrap();
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, MedalError::Schema { line: 1, .. }));
    }

    #[test]
    fn test_rejects_double_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(
            &path,
            "Country,Sport,Modality - Athlete,Gold,Silver,Bronze\nA,B,C,1,0,0\nA,B,D,1,1,0\n",
        )
        .unwrap();
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, MedalError::Schema { line: 3, .. }));
    }

    #[test]
    fn test_rejects_non_numeric_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(
            &path,
            "Country,Sport,Modality - Athlete,Gold,Silver,Bronze\nA,B,C,yes,0,0\n",
        )
        .unwrap();
        assert!(matches!(
            load_records(&path).unwrap_err(),
            MedalError::Schema { line: 2, .. }
        ));
    }

    #[test]
    fn test_rejects_empty_country() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(
            &path,
            "Country,Sport,Modality - Athlete,Gold,Silver,Bronze\n,B,C,0,0,1\n",
        )
        .unwrap();
        assert!(matches!(
            load_records(&path).unwrap_err(),
            MedalError::Schema { .. }
        ));
    }

    #[test]
    fn test_export_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut first = Table::new(["Sport"]);
        first.push_row(vec!["Judo".to_string()]);
        let second = Table::new(["Country"]);

        let path = export_table(&first, dir.path(), "view").unwrap();
        assert_eq!(path, dir.path().join("view.csv"));
        export_table(&second, dir.path(), " view ").unwrap();

        let loaded = Table::load_csv(&path).unwrap();
        assert_eq!(loaded, second);
    }

    #[test]
    fn test_export_rejects_blank_name() {
        let dir = TempDir::new().unwrap();
        let table = Table::new(["Sport"]);
        assert!(export_table(&table, dir.path(), "  ").is_err());
    }
}
