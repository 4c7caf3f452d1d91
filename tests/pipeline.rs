//! End-to-end: listing file -> medal table -> queries -> export -> reload

use medaltally::extract::{read_lines, Extractor};
use medaltally::repl::{DisplayManager, MedalViewer, ScriptedInput, ViewKind, ViewOutcome};
use medaltally::table::{export_table, load_records, save_records};
use medaltally::{QueryEngine, ReferenceSets, Table};
use std::fs;
use tempfile::TempDir;

const LISTING: &str = "\
1
People's Republic of China
People's Republic of China flag
Diving
Women's Synchronised 3m Springboard
Chen Yiwen
Chang Yani
Gold medal
Table Tennis
Gold medal
Mixed Doubles
2
United States of America
United States of America flag
Athletics
Men's 100m
Noah Lyles
9:79
Gold medal
Swimming
Women's 1500m Freestyle
Katie Ledecky
Gold medal
Women's 4x100m Medley
close the row
Silver medal
Hong Kong, China
Fencing
Women's Épée Individual
Vivian Kong
Gold medal
";

fn write_listing(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("olympics2024_data.txt");
    fs::write(&path, LISTING).unwrap();
    path
}

fn build_table(dir: &TempDir) -> std::path::PathBuf {
    let lines = read_lines(&write_listing(dir)).unwrap();
    let report = Extractor::new(&ReferenceSets::builtin()).run(&lines);
    let table = dir.path().join("olympics2024.csv");
    save_records(&table, &report.records).unwrap();
    table
}

#[test]
fn test_extract_listing() {
    let dir = TempDir::new().unwrap();
    let lines = read_lines(&write_listing(&dir)).unwrap();
    let report = Extractor::new(&ReferenceSets::builtin()).run(&lines);

    let labels: Vec<&str> = report
        .records
        .iter()
        .map(|r| r.athlete_modality())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Women's Synchronised 3m Springboard - Chen Yiwen - Chang Yani",
            "Mixed Doubles",
            "Men's 100m - Noah Lyles",
            "Women's 1500m Freestyle - Katie Ledecky",
            "Women's 4x100m Medley - close the row",
            "Women's Épée Individual - Vivian Kong",
        ]
    );
    assert_eq!(report.records[4].silver(), 1);
    assert_eq!(report.records[5].country(), "Hong Kong, China");
    assert!(report.anomalies.is_empty());
}

#[test]
fn test_table_reload_and_query() {
    let dir = TempDir::new().unwrap();
    let path = build_table(&dir);

    let engine = QueryEngine::new(load_records(&path).unwrap());
    assert_eq!(engine.records().len(), 6);

    let ranking = engine.rank_countries();
    assert_eq!(ranking[0].country, "United States of America");
    assert_eq!(ranking[0].tally.ranking_key(), (2, 1, 0));
    assert_eq!(ranking[1].country, "People's Republic of China");
    assert_eq!(ranking[2].country, "Hong Kong, China");

    let usa = engine.sports_by_country("United States of America").unwrap();
    assert_eq!(usa.len(), 2);
}

#[test]
fn test_export_round_trip_matches_display() {
    let dir = TempDir::new().unwrap();
    let engine = QueryEngine::new(load_records(&build_table(&dir)).unwrap());

    let views = [
        Table::country_ranking(&engine.rank_countries()),
        Table::sport_tallies(&engine.sports_by_country("United States of America").unwrap()),
        Table::medalists(&engine.athletes_by_sport("Swimming", None)),
    ];

    for (idx, view) in views.iter().enumerate() {
        let path = export_table(view, dir.path(), &format!("view{}", idx)).unwrap();
        let reloaded = Table::load_csv(&path).unwrap();
        assert_eq!(&reloaded, view);
    }
}

#[test]
fn test_viewer_session_over_persisted_table() {
    let dir = TempDir::new().unwrap();
    let engine = QueryEngine::new(load_records(&build_table(&dir)).unwrap());
    let exports = dir.path().join("exports");

    let input = ScriptedInput::new([
        "1", "no", // ranking, not saved
        "3", "2", "Hong Kong, China", "Swimming", // nothing from Hong Kong in swimming
        "3", "1", "Swimming", "yes", "swimmers", // saved
        "4",
    ]);
    let mut viewer =
        MedalViewer::new(&engine, input, exports.clone()).with_display(DisplayManager::with_width(80));
    let outcomes = viewer.run().unwrap();

    assert_eq!(outcomes.len(), 4);
    assert!(matches!(
        outcomes[0],
        ViewOutcome::Shown {
            kind: ViewKind::CountryRanking,
            rows: 3,
            saved: None
        }
    ));
    assert!(matches!(outcomes[1], ViewOutcome::NoMedalists { .. }));
    assert_eq!(
        outcomes[2],
        ViewOutcome::Shown {
            kind: ViewKind::AthletesBySport,
            rows: 2,
            saved: Some(exports.join("swimmers.csv"))
        }
    );
    assert_eq!(outcomes[3], ViewOutcome::Exit);

    let saved = Table::load_csv(&exports.join("swimmers.csv")).unwrap();
    assert_eq!(saved.headers[1], "Modality - Athlete");
    assert_eq!(saved.rows[1][1], "Women's 4x100m Medley - close the row");
    assert_eq!(viewer.into_input().remaining(), 0);
}
