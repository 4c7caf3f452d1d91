//! medaltally - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use medaltally::{
    cli::{Args, Commands, Config, QueryOpts, Verbosity},
    extract::{self, Extractor},
    repl::{DisplayManager, InputHandler, MedalViewer},
    table::{self, Table},
    QueryEngine,
};

/// Inputs shorter than this finish too fast for a progress bar to be useful
const PROGRESS_MIN_LINES: usize = 10_000;

fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = args.verbosity();
    init_tracing(verbosity);
    tracing::debug!(verbosity = verbosity.as_str(), "starting");

    let config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    if !config.display.color_output {
        colored::control::set_override(false);
    }

    match args.command() {
        Commands::Extract { input, output } => run_extract(&config, verbosity, input, output),
        Commands::View { table } => run_view(&config, table),
        Commands::Rank { query } => {
            let engine = load_engine(&config, query.table.as_deref())?;
            let ranking = engine.rank_countries();
            emit(&config, &query, "Country Ranking", &ranking, Table::country_ranking(&ranking))
        }
        Commands::Sports { country, query } => {
            let engine = load_engine(&config, query.table.as_deref())?;
            let tallies = engine.sports_by_country(&country)?;
            emit(&config, &query, &country, &tallies, Table::sport_tallies(&tallies))
        }
        Commands::Athletes {
            sport,
            country,
            query,
        } => {
            let engine = load_engine(&config, query.table.as_deref())?;
            let records = engine.athletes_by_sport(&sport, country.as_deref());
            if records.is_empty() {
                let scope = country
                    .map(|c| format!(" from {}", c))
                    .unwrap_or_default();
                println!("{}", format!("No medalists found{} in {}", scope, sport).yellow());
                return Ok(());
            }
            emit(&config, &query, &sport, &records, Table::medalists(&records))
        }
        Commands::Config { init } => {
            if init {
                let path = args
                    .config
                    .clone()
                    .or_else(Config::default_path)
                    .context("No home directory; pass --config")?;
                config.save(&path)?;
                println!("{} Configuration written to {}", "✓".green().bold(), path.display());
            } else {
                print!("{}", config.to_toml()?);
            }
            Ok(())
        }
    }
}

fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse the raw listing and write the medal table
fn run_extract(
    config: &Config,
    verbosity: Verbosity,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let input = input.unwrap_or_else(|| config.input_file());
    let output = output.unwrap_or_else(|| config.table_file());

    let refs = config.reference_sets()?;
    let lines = extract::read_lines(&input)?;
    tracing::info!(path = %input.display(), lines = lines.len(), "input read");

    let mut extractor = Extractor::new(&refs);
    if config.display.show_progress
        && verbosity.show_progress()
        && lines.len() >= PROGRESS_MIN_LINES
    {
        let pb = ProgressBar::new(lines.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} Extracting [{bar:40.cyan/blue}] {pos}/{len} lines")?
                .progress_chars("=>-"),
        );
        extractor = extractor.with_progress(pb);
    }

    let report = extractor.run(&lines);
    table::save_records(&output, &report.records)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if verbosity != Verbosity::Quiet {
        println!(
            "{} {} records written to {}",
            "✓".green().bold(),
            report.records.len().to_string().green(),
            output.display()
        );
        println!(
            "  Lines: {} | Headings: {} | Dropped: {} | Anomalies: {}",
            report.lines_seen,
            report.headings,
            report.dropped,
            report.anomalies.len()
        );
        for anomaly in &report.anomalies {
            println!("  {} line {}: {:?}", "!".yellow(), anomaly.line_no, anomaly.anomaly);
        }
    }

    Ok(())
}

/// Interactive menu over the medal table
fn run_view(config: &Config, table: Option<PathBuf>) -> Result<()> {
    let engine = load_engine(config, table.as_deref())?;
    if engine.is_empty() {
        DisplayManager::new().show_warning("The medal table has no rows.");
    }

    let input = match dirs::home_dir() {
        Some(home) => InputHandler::with_history(home.join(".medaltally").join("history"))?,
        None => InputHandler::new()?,
    };

    let mut viewer = MedalViewer::new(&engine, input, config.export_dir());
    viewer.run()?;

    let mut input = viewer.into_input();
    if let Err(err) = input.save_history() {
        tracing::debug!(%err, "history not saved");
    }
    Ok(())
}

fn load_engine(config: &Config, table: Option<&Path>) -> Result<QueryEngine> {
    let path = table.map(Path::to_path_buf).unwrap_or_else(|| config.table_file());
    let records = table::load_records(&path)
        .with_context(|| format!("Failed to load medal table {}", path.display()))?;
    Ok(QueryEngine::new(records))
}

/// Print a query result as JSON or a table, exporting when asked
fn emit<T: Serialize + ?Sized>(
    config: &Config,
    query: &QueryOpts,
    title: &str,
    value: &T,
    view: Table,
) -> Result<()> {
    if query.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        DisplayManager::new().show_table(title, &view);
    }

    if let Some(name) = &query.export {
        let path = table::export_table(&view, &config.export_dir(), name)?;
        eprintln!("Saved {}", path.display());
    }
    Ok(())
}
